use crate::domain::article::{ArticleContent, Language};

fn english(language: Language, content: ArticleContent) -> Option<ArticleContent> {
    (language == Language::En).then_some(content)
}

const SUDOKU_GENERATION_EN: ArticleContent = ArticleContent {
    title: "Sudoku generation",
    description: "How to generate random sudoku puzzles that have a single solution",
    share_sentence: Some("Ever wondered how sudoku puzzles are generated? Here is one way to do it 🧩"),
    introduction: r"<p>After talking about sudokus with my mom I realized I had no idea how the puzzles in the newspaper are generated. Filling a grid is easy; removing numbers so that exactly one solution remains is the interesting part. This is the approach I ended up implementing.</p>",
    body: r"<h3>Filling the grid</h3>
<p>Start from an empty board and place candidate numbers box by box, backtracking whenever a cell runs out of candidates. Shuffling the candidates makes every run produce a different grid.</p>
<h3>Removing numbers</h3>
<p>Remove one number at a time and solve the resulting puzzle. If the solver finds more than one solution, put the number back and try a different cell.</p>
<h3>Difficulty</h3>
<p>The amount of numbers left on the board is a rough proxy for difficulty, but the techniques required to solve it matter much more.</p>",
};

const SUDOKU_GENERATION_CA: ArticleContent = ArticleContent {
    title: "Generació de sudokus",
    description: "Com generar sudokus aleatoris que tinguin una única solució",
    share_sentence: Some("T'has preguntat mai com es generen els sudokus? Aquí tens una manera de fer-ho 🧩"),
    introduction: r"<p>Parlant de sudokus amb la meva mare em vaig adonar que no tenia ni idea de com es generen els sudokus del diari. Omplir una graella és fàcil; treure números de manera que només quedi una solució és la part interessant. Aquest és el mètode que vaig acabar implementant.</p>",
    body: r"<h3>Omplir la graella</h3>
<p>Comencem amb un tauler buit i col·loquem números candidats caixa per caixa, tornant enrere quan una casella es queda sense candidats.</p>
<h3>Treure números</h3>
<p>Traiem un número cada cop i resolem el sudoku resultant. Si hi ha més d'una solució, tornem a posar el número i provem una altra casella.</p>",
};

pub(super) fn sudoku_generation(language: Language) -> Option<ArticleContent> {
    match language {
        Language::En => Some(SUDOKU_GENERATION_EN),
        Language::Ca => Some(SUDOKU_GENERATION_CA),
    }
}

pub(super) fn express_on_google_cloud(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Running express on Google Cloud",
            description: "How to deploy your node.js express app to Google Cloud Platform for first-timers",
            share_sentence: Some(
                "Interested in cloud infrastructure? Learn how to deploy your node.js express app to Google Cloud Platform 🚀",
            ),
            introduction: r"<p>So you have just finished your splendid new node.js express app, it runs smoothly in your local environment and you are ready to make it available to the users who are eagerly awaiting for the release. The question now is... where to deploy it? Google Cloud Platform lets you deploy your app with a single command and handles the scaling your app needs according to the users traffic.</p>",
            body: r#"<img class="article-image image-600" src="/images/blog/express-on-google-cloud/autoscaling.gif" alt="Autoscaling environment" />
<h3>The conventional way</h3>
<p>A dedicated virtual machine with the runtime installed. It caps how many users can be served at once and it keeps billing when nobody is using the app.</p>
<img class="article-image" src="/images/blog/express-on-google-cloud/gcp-compute-engine.png" alt="GCP virtual machines page" />
<h3>The cloud way</h3>
<p>Platform as a service delegates hardware, network and runtime to the provider. GCP offers App Engine, Cloud Functions and Cloud Run; App Engine is the best fit for web applications.</p>
<h3>Simple yet realistic app</h3>
<p>An express server that reads the port from the environment and serves a few routes.</p>
<h3>Google App Engine</h3>
<p>An <code>app.yaml</code> file declares the runtime and the instance class.</p>
<h3>Deployment</h3>
<pre>gcloud auth login
gcloud projects create my-express-app
gcloud app create
gcloud app deploy</pre>"#,
        },
    )
}

pub(super) fn wordpress_on_google_cloud(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Https, email ready WordPress site on Google Cloud Platform",
            description: "How to run an HTTPS, email ready wordpress site on Google Cloud Platform",
            share_sentence: Some("Get your HTTPS, email ready wordpress site running on GCP!"),
            introduction: r"<p>Need somewhere to host your WordPress site? Google Cloud Platform makes it specially easy, providing pre-configured virtual machines. Your site will be up and running in under an hour, using your custom domain, accepting HTTPS traffic and being able to send emails from contact forms.</p>",
            body: r#"<img class="article-image" src="/images/blog/wordpress-on-google-cloud/deployment-manager-api.png" alt="Deployment manager API" />
<h3>Creating the WordPress site</h3>
<p>The Marketplace offers a WordPress deployment that provisions the virtual machine, the database and the web server in a single step.</p>
<h3>Enabling HTTPS traffic</h3>
<p>Point your domain to the static IP of the machine and request a certificate with Let's Encrypt.</p>
<h3>Sending emails from WordPress</h3>
<p>Outbound SMTP ports are blocked on Compute Engine, so contact forms need a mail relay service.</p>"#,
        },
    )
}

pub(super) fn android_app_publishing(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Publishing an Android app to Play Store",
            description: "Detailed explanation on how to publish an Android app to Play Store",
            share_sentence: Some(
                "Want to publish an Android app to Play Store? This is what it looks like in 2021",
            ),
            introduction: r"<p>So you just had that amazing idea for a killer mobile app. You know how to develop it and you have the motivation but you are not sure how hard it's gonna be to get it published on Play Store. This is what it looks like to upload an Android app to Play Store in January 2021.</p>",
            body: r#"<img class="article-image" src="/images/blog/android-app-publishing/play-console-home.png" alt="Play Console home" />
<h3>Google Play Console</h3>
<p>Everything starts with a developer account and a one-time registration fee.</p>
<h3>App content</h3>
<p>Privacy policy, ads declaration, content rating and target audience must be filled before releasing.</p>
<h3>Store presence</h3>
<p>Icons, screenshots and descriptions make up the store listing.</p>
<h3>Release your app</h3>
<p>Upload the app bundle to a track, roll it out and wait for the review.</p>
<h3>Handling rejection</h3>
<p>Rejections come with a reason; fix it and submit a new release.</p>"#,
        },
    )
}

pub(super) fn ios_app_publishing(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Publishing an iOS app to App Store",
            description: "Detailed explanation on how to publish an iOS app to App Store",
            share_sentence: Some(
                "Want to publish an iOS app to App Store? This is what it looks like in 2021",
            ),
            introduction: r"<p>So you heard that Apple is rather picky when it comes to accepting apps in App Store. And indeed, Apple does make it much harder than Google when it comes to publishing apps. This doesn't mean it's impossible however. This is what it looks like to upload an iOS to App Store in January 2021.</p>",
            body: r#"<img class="article-image" src="/images/blog/ios-app-publishing/apple-developer-portal-1.png" alt="Apple developer portal" />
<h3>Apple Developer Portal</h3>
<p>Register the bundle identifier and create the certificates and provisioning profiles.</p>
<h3>App Store Connect</h3>
<p>Create the app record, fill in the metadata and upload the build.</p>
<h3>Submit for Review</h3>
<p>Reviews take a couple of days and rejections are frequent. Patience.</p>"#,
        },
    )
}

pub(super) fn react_native_firebase_auth(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Email authentication in React Native apps using Firebase",
            description: "How to implement user authentication in React Native apps using Firebase",
            share_sentence: Some(
                "Building a React Native app? Use Firebase and don't waste time with Authentication!",
            ),
            introduction: r"<p>I choose React Native to develop mobile apps because it simplifies development so I want user authentication to be as simple as possible too. Firebase provides backend services and client side SDKs for authentication purposes and it's built by Google. That's a match!</p>",
            body: r"<h3>Why Firebase Authentication?</h3>
<p>Sign up, sign in, email verification and password reset come out of the box.</p>
<h3>Configuring Firebase</h3>
<p>Create a project, enable the email provider and customise the email templates.</p>
<h3>The SDK methods</h3>
<p>A handful of SDK calls cover the whole authentication flow.</p>
<h3>Android timers</h3>
<p>The SDK sets long timers that trigger a warning on Android; it can be safely silenced.</p>
<h3>The screens</h3>
<p>Sign in, sign up and password reset screens complete the app.</p>",
        },
    )
}

pub(super) fn expo_social_sign_in(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Apple/Google authentication in Expo apps using Firebase",
            description: "How to implement Apple and Google authentication in Expo apps using Firebase",
            share_sentence: Some(
                "Want to improve your Expo app's sign-up conversion rate? Here is how to add social sign-in using Firebase!",
            ),
            introduction: r"<p>You are authenticating your Expo app users with email and password using Firebase. It works great but marketing funnels seem to indicate that users quit the app at the sign up screen. Offering social sign in options will help mitigate that problem. This is how to do it in February 2021!</p>",
            body: r#"<img class="article-image" src="/images/blog/expo-social-sign-in/firebase-auth-providers.png" alt="Firebase authentication providers" />
<h3>Firebase limitations in React Native</h3>
<p>The popup based providers of the web SDK are not available in React Native, so credentials must be obtained natively.</p>
<h3>Sign in with Google</h3>
<p>Expo's Google authentication module returns an id token that Firebase accepts as a credential.</p>
<h3>Sign in with Apple</h3>
<p>Apple sign in requires a nonce and is only available on iOS devices.</p>"#,
        },
    )
}

pub(super) fn expo_push_notifications(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "First-class push notifications for Expo apps",
            description: "How to implement push notifications in Expo managed apps",
            share_sentence: Some(
                "That's how easy it is to bring push notifications to your Expo app!",
            ),
            introduction: r"<p>So the time has come for your brilliant Expo app to start delivering push notifications. You've had a look at the multiple options available and still you are unsure which one to go for. This is all you need to know before implementing push notifications on your managed Expo app.</p>",
            body: r#"<img class="article-image" src="/images/blog/expo-push-notifications/push-token-collection.png" alt="Push token collection" />
<h3>Technical considerations</h3>
<p>Expo's push service wraps both FCM and APNs behind a single token.</p>
<h3>Implementation: client side</h3>
<p>Request permissions, obtain the token and send it to the server.</p>
<h3>Implementation: server side</h3>
<p>Store the tokens and send notifications in chunks through the Expo SDK.</p>
<h3>Wrapping up</h3>
<p>Check the receipts to prune tokens of uninstalled apps.</p>"#,
        },
    )
}

pub(super) fn typescript_monorepo(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Effective code sharing in Typescript monorepos",
            description: "How to share code between client and server in Typescript monorepos",
            share_sentence: Some(
                "Time to get rid of the duplicated code in your Typescript monorepo!",
            ),
            introduction: r"<p>With the popularization of node.js, it's becoming more and more usual to find the same programming language in both sides of web applications. Using node.js in the server side allows for re-using a good amount of logic but, how can we effectively share code between client and server in Typescript monorepos? Let's have a look at different alternatives.</p>",
            body: r#"<img class="article-image" src="/images/blog/typescript-monorepo/weather-now-ui.png" alt="Weather now UI" />
<h3>1. Relative paths fixes</h3>
<p>The quickest option, with the drawback of leaking the folder structure into every import.</p>
<h3>2. common npm project</h3>
<p>A dedicated project for the shared code, compiled on its own.</p>
<h3>3. common npm project + npm local dependencies</h3>
<p>Installing the shared project as a local dependency gives clean imports.</p>
<h3>4. common npm project + npm workspaces</h3>
<p>Workspaces link the projects automatically and install dependencies once.</p>
<h3>Conclusions</h3>
<p>Workspaces are the most convenient choice for most repositories.</p>"#,
        },
    )
}

pub(super) fn express_typed_api(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "@express-typed-api: inferring the fetch requests' return type",
            description: "How to use @express-typed-api to declare a type for an express API and automatically infer the corresponding fetch requests' return type",
            share_sentence: Some(
                "Automatically infer your fetch requests' return type through @express-typed-api",
            ),
            introduction: r#"<p>Even though choosing Typescript to develop an express web app provides type safety in both client and server, the fetch requests data remains untyped on both ends. With that idea in mind I wrote <span class="inline-snippet">@express-typed-api</span>, a library to help creating a type declaration for an express API so that it can be used to infer the fetch requests' return type from the client side.</p>"#,
            body: r"<h3>The problem</h3>
<p>Client and server agree on payloads only by convention.</p>
<h3>1. API's type declaration</h3>
<p>Declare each endpoint's path, method and handler in a single type.</p>
<h3>2. Handlers' return type</h3>
<p>Handlers return typed responses instead of calling the response object directly.</p>
<h3>3. Consistent API's implementation</h3>
<p>The express app is built from the declaration, so the two cannot drift apart.</p>
<h3>4. Fetch requests' return type inferring</h3>
<p>A typed fetch wrapper infers the payload type from the endpoint path.</p>",
        },
    )
}

pub(super) fn webrtc(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "A comprehensive WebRTC walkthrough",
            description: "How to establish a connection between two browsers using WebRTC",
            share_sentence: Some("Establishing a connection between two browsers via WebRTC"),
            introduction: r"<p>WebRTC allows for real-time communication between two peers using only the browser's built-in functionalities, with no need for a communications server. That's AWESOME. But turns out that the browser API is complex. Here is an attempt to provide a clear example.</p>",
            body: r#"<img class="article-image" src="/images/blog/webrtc/webrtc-connection-diagram.png" alt="WebRTC connection diagram" />
<h3>Connection overview</h3>
<p>Peers exchange an offer, an answer and ICE candidates through any signalling channel.</p>
<h3>Data channels</h3>
<p>Arbitrary messages travel over data channels once the connection is open.</p>
<h3>Stream tracks</h3>
<p>Audio and video tracks are added to the connection before negotiating.</p>
<h3>Connection tear down</h3>
<p>Close the channels and the connection on both ends.</p>"#,
        },
    )
}

pub(super) fn typescript_monorepo_ii(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Distribution of Typescript shared code without package repositories",
            description: "Distributing shared Typescript code to production environments without package repositories",
            share_sentence: Some(
                "You don't need package repositories to distribute your Typescript monorepo shared code to production environments. Here are a couple of ways to do it!",
            ),
            introduction: r#"<p>A couple years ago I wrote a piece about <a href="/blog/typescript-monorepo">sharing code in Typescript monorepos</a>, focusing mainly on npm workspaces, and I left out an important aspect of the software development lifecycle: shipping the compiled files to production environments.</p>"#,
            body: r"<h3>Relative path imports</h3>
<p>Bundle the shared code together with each application at build time.</p>
<h3>npm dependencies</h3>
<p>Pack the shared project as a tarball and install it as a file dependency.</p>",
        },
    )
}

pub(super) fn typed_web_api(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "@typed-web-api: type safety for fetch requests",
            description: "How to use @typed-web-api to declare a type for a web API and automatically infer the corresponding network requests' return type",
            share_sentence: Some(
                "Automatically infer network requests' return type through @typed-web-api",
            ),
            introduction: r#"<p>Writing a web app in Typescript provides type safety in both the client and the server but, what about the communication between the two sides? With that idea in mind I wrote <span class="inline-snippet">@typed-web-api</span>, a minimalist approach to adding type safety to fetch requests. Here is how to use it.</p>"#,
            body: r#"<img class="article-image" src="/images/blog/typed-web-api/antenna.jpg" alt="Antenna" />
<p>Declare the API type once, use it to implement the server endpoints and let the typed fetch infer the responses on the client.</p>"#,
        },
    )
}

pub(super) fn otf_migrations(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Supporting offline data on ever-changing database schemas",
            description: "How to accept data generated on old schema versions by migrating it on the fly",
            share_sentence: Some(
                "This is how Trello-like apps support offline data on ever-changing database schemas",
            ),
            introduction: r"<p>Apps that allow users to generate data while being offline (Trello, for example) generally provide a better user experience. They must resolve a challenge however: because the database schema naturally changes as the app evolves, the server must support incoming data generated on an old schema version. How? Here is my take on it.</p>",
            body: r#"<img class="article-image" src="/images/blog/otf-migrations/hard-drive.jpg" alt="Hard drive" />
<h3>The challenge</h3>
<p>Clients may sync weeks after generating data, long after the schema has changed.</p>
<h3>Hands on</h3>
<p>Tag every payload with its schema version and chain migration functions until the current version is reached.</p>"#,
        },
    )
}

pub(super) fn web_api_proxy_migration(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Gradual replacement of legacy web APIs using 404 responses and http-proxy",
            description: "How to gradually replace a legacy web API with 404 responses and http-proxy",
            share_sentence: Some(
                "Start migrating your legacy web API today! 404 responses and http-proxy will let you do it gradually",
            ),
            introduction: r"<p>Re-writing a legacy web API takes time and the exercise will probably span across several releases. We will most likely be facing a scenario where both APIs run in parallel. But it turns out such an scenario can be achieved painlessly by using the good old http-proxy library and 404 responses! Here is how.</p>",
            body: r#"<img class="article-image" src="/images/blog/web-api-proxy-migration/web-proxy.png" alt="Web proxy" />
<h3>The meat on the bone</h3>
<p>The new API answers the endpoints it has migrated and returns 404 for the rest; a proxy forwards those 404s to the legacy API.</p>"#,
        },
    )
}

pub(super) fn minimalistic_translation(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "A minimalistic approach to transparently translating your application",
            description: "How to transparently translate your application with minimal complexity",
            share_sentence: Some("Automatically translate your application in this simple fashion"),
            introduction: r"<p>Translating an application is not trivial but it shouldn't be complicated. Using existing tools, we can flag the text that needs to be translated and extract it into resource files. Such files will be populated, either by human translators or machine generated content, and then the translation software will transparently do the rest.</p>",
            body: r#"<img class="article-image" src="/images/blog/minimalistic-translation/translation-art.jpg" alt="Translation art" />
<h3>Custom code: translate</h3>
<p>A function that looks the text up in the resource file of the current language.</p>
<h3>Custom code: interpolation</h3>
<p>Placeholders in the translatable text get replaced by runtime values.</p>
<h3>Standard code: react-i18next</h3>
<p>The same ideas, backed by a maintained library.</p>
<h3>Conclusions</h3>
<p>Start small; switch to a library when the custom code stops being enough.</p>"#,
        },
    )
}

pub(super) fn jira_google_sheets(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Supercharged JIRA reporting using Google Sheets",
            description: "How to fetch JIRA issues from Google Sheets and customize the results list",
            share_sentence: Some("Supercharge your JIRA reporting using Google Sheets"),
            introduction: r"<p>JIRA has a powerful builtin querying language, a reasonable Issues list view and useful export functions. It does however lack the flexibility of aggregating fields in queries, customizing the list view or formatting the exported files. If the mountain will not come to Muhammad... let the JIRA issues come to Google Sheets!</p>",
            body: r#"<img class="article-image" src="/images/blog/jira-google-sheets/jira-cloud-extension.png" alt="JIRA cloud extension" />
<h3>Setup</h3>
<p>An Apps Script custom function calls the JIRA REST API with an API token.</p>
<h3>Features</h3>
<p>JQL queries, selectable fields and aggregated columns straight into the spreadsheet.</p>"#,
        },
    )
}

pub(super) fn react_ssr(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "React server side rendering powered by Webpack",
            description: "How to generate a Node.js compatible webpack bundle to render a React app on the server",
            share_sentence: Some(
                "Render React on your Node.js server with just a few Webpack tweaks ⚙️",
            ),
            introduction: r"<p>Sooner or later you will need to support Search Engine Optimization in your React app. Fortunately, React uses a virtual DOM and it can easily be rendered on Node.js servers. We just need to generate a Node.js compatible assets bundle, make the server aware of the client side routing and adapt asynchronous data fetching. Let's get started.</p>",
            body: r#"<img class="article-image" src="/images/blog/react-ssr/server-rendering.jpg" alt="Abstract representation of server rendering" />
<h3>Starting point</h3>
<p>An express server that serves static files and a "Hello World" React app.</p>
<h3>Server SSR setup</h3>
<p>Intercept requests to the index.html file, render the app and inject the markup into the app-placeholder element.</p>
<h3>Routing</h3>
<p>The server must know which URLs belong to the client side router.</p>
<h3>Fetching data on app start</h3>
<p>Asynchronous data must be available before rendering on the server.</p>"#,
        },
    )
}

pub(super) fn dynamic_sitemap(language: Language) -> Option<ArticleContent> {
    english(
        language,
        ArticleContent {
            title: "Dynamic sitemap for a server rendered site",
            description: "How to generate an always up to date sitemap from the routes of a server rendered React app",
            share_sentence: Some("Keep your sitemap in sync with your routes and let search engines find every page 🗺️"),
            introduction: r"<p>Server side rendering gets your pages indexed, but search engines still need to find them. A sitemap lists every URL of the site; writing it by hand means it goes stale the moment a new article is published. Generating it from the same data that drives the router keeps both in sync.</p>",
            body: r#"<img class="article-image" src="/images/blog/dynamic-sitemap/indexing.jpg" alt="Abstract representation of search engine indexing" />
<h3>Listing the routes</h3>
<p>Every route without parameters becomes one entry, and every article adds its own URL.</p>
<h3>Serving the sitemap</h3>
<p>The server builds the XML document on request and references it from robots.txt.</p>
<h3>Submitting it</h3>
<p>Search Console accepts the sitemap URL and reports which pages were indexed.</p>"#,
        },
    )
}
