use crate::domain::portfolio::{
    DemoLink::{External, Hosted},
    ImageOrientation::{Landscape, Portrait},
    Project, ProjectRepository,
    ProjectSection::{PersonalPageEvolution, Projects},
};

const PROJECTS: [Project; 17] = [
    Project {
        title: "DAGGOUT",
        date: Some("2021"),
        image: "daggout.png",
        image_orientation: Portrait,
        repository: None,
        demo: Some(External("https://play.google.com/store/apps/details?id=daggout.user")),
        description: &[
            "Android/iOS app designed to store and manage clothing receipts, allowing the user to filter them by store and set return deadline notifications.",
            "DAGGOUT SL was a startup I co-founded along with <b>Oscar Ortega</b> during our residence in Demium startup incubator, aiming to digitize paper receipts for the fashion industry.",
        ],
        section: Projects,
    },
    Project {
        title: "desdecasa",
        date: Some("2012"),
        image: "desdecasa.png",
        image_orientation: Landscape,
        repository: Some("desdecasa"),
        demo: None,
        description: &[
            "First attempt to build an online business! Along with <b>Eudald Bover</b> we developed this restaurant discounts web app and managed to sell 150 membership cards to the website users.",
        ],
        section: Projects,
    },
    Project {
        title: "jokify",
        date: Some("2020"),
        image: "jokify.png",
        image_orientation: Landscape,
        repository: Some("jokify"),
        demo: Some(Hosted("/jokify/")),
        description: &[
            "Instead of deleting all those twitter jokes I get over the phone, I decided I had to make them available to the world. Here you will find them (in Spanish).",
        ],
        section: Projects,
    },
    Project {
        title: "webjack",
        date: Some("2018"),
        image: "webjack.png",
        image_orientation: Landscape,
        repository: Some("webjack"),
        demo: Some(Hosted("/webjack/")),
        description: &[
            "Cashless online multiplayer Blackjack game. Play online with strangers, practice offline against the dealer or learn the Blackjack basic strategy.",
        ],
        section: Projects,
    },
    Project {
        title: "Bromuro",
        date: Some("2020"),
        image: "bromuro.png",
        image_orientation: Portrait,
        repository: Some("bromuro"),
        demo: Some(External("https://play.google.com/store/apps/details?id=capelski.bromuro")),
        description: &[
            "Collection of twitter jokes (in Spanish) delivered through an Android app. Filter them by text, share them with your friends and have them always available in your phone.",
        ],
        section: Projects,
    },
    Project {
        title: "Blackjump",
        date: Some("2021"),
        image: "blackjump.png",
        image_orientation: Portrait,
        repository: Some("blackjump"),
        demo: Some(External("https://play.google.com/store/apps/details?id=capelski.blackjump")),
        description: &[
            "Android app designed to learn the basic strategy for Blackjack card game. Set the rules of your favorite casino and get ready to beat the dealer.",
        ],
        section: Projects,
    },
    Project {
        title: "vue.js Meetup talk",
        date: Some("2019"),
        image: "vue-ssr.png",
        image_orientation: Landscape,
        repository: Some("vue-ssr-tutorial"),
        demo: Some(External("https://www.youtube.com/watch?v=uWsAFV14Svw")),
        description: &[
            "Meetup talk hosted by VueJS Barcelona. The talk features a simple yet realistic vue.js app and walks through the process of getting it to render on the server side.",
        ],
        section: Projects,
    },
    Project {
        title: "sudoku generator",
        date: Some("2020"),
        image: "sudoku-generator.png",
        image_orientation: Landscape,
        repository: Some("sudoku-generator"),
        demo: Some(Hosted("/sudoku-generator/")),
        description: &[
            "Web application that generates random sudoku puzzles and offers hints on how to solve them. It can also be used to solve existing puzzles.",
        ],
        section: Projects,
    },
    Project {
        title: "skills matrix",
        date: Some("2019"),
        image: "skills-matrix-graphql.png",
        image_orientation: Landscape,
        repository: Some("skills-matrix-api-graphql"),
        demo: None,
        description: &[
            "A simple <b>GraphQL Api</b> with the typical features used in any modern Api (filtering, pagination, referenced entities, ordering), accessible through a GraphiQL interface.",
        ],
        section: Projects,
    },
    Project {
        title: "fractal generator",
        date: Some("2017"),
        image: "fractal-generator.png",
        image_orientation: Landscape,
        repository: Some("fractal-generator"),
        demo: Some(Hosted("/fractal-generator/")),
        description: &[
            "Web app that generates fractal pictures by replicating the pattern in a grid. Pick a color and hit the reset button until you get something you like!",
        ],
        section: Projects,
    },
    Project {
        title: "michael.page",
        date: Some("2018"),
        image: "michael-page.png",
        image_orientation: Landscape,
        repository: Some("michael"),
        demo: Some(Hosted("/michael/")),
        description: &["Tribute page to all the Michaels of the world. Who doesn't have a Michael in their life?"],
        section: Projects,
    },
    Project {
        title: "càrniques ausà",
        date: Some("2016"),
        image: "carniques-ausa.png",
        image_orientation: Landscape,
        repository: Some("carniques-ausa"),
        demo: Some(Hosted("/carniques-ausa/")),
        description: &[
            "\"It must have an interactive pig!\". That was the sentence that convinced me to build the <b>Càrniques Ausà</b> pork company website.",
        ],
        section: Projects,
    },
    Project {
        title: "poliester pelegrina",
        date: Some("2014"),
        image: "poliester-pelegrina.png",
        image_orientation: Landscape,
        repository: Some("poliester-pelegrina"),
        demo: None,
        description: &["This was the <b>Poliester Pelegrina</b> polyester company official website."],
        section: Projects,
    },
    Project {
        title: "d.o. vic",
        date: Some("2013"),
        image: "dovic.png",
        image_orientation: Landscape,
        repository: Some("do-vic"),
        demo: None,
        description: &[
            "This was the <b>D.O. Vic</b> restaurant official website for two years. It provided the restaurant menus, contact information, pictures of the establishment and allowed making reservations.",
        ],
        section: Projects,
    },
    Project {
        title: "vue.js",
        date: Some("2019"),
        image: "vue-personal-page.png",
        image_orientation: Landscape,
        repository: Some("vue-personal-page"),
        demo: Some(Hosted("/vue-personal-page/")),
        description: &[],
        section: PersonalPageEvolution,
    },
    Project {
        title: "angular.js",
        date: Some("2015"),
        image: "angularjs-personal-page.png",
        image_orientation: Landscape,
        repository: Some("angularjs-personal-page"),
        demo: Some(Hosted("/angularjs-personal-page/")),
        description: &[],
        section: PersonalPageEvolution,
    },
    Project {
        title: "php",
        date: Some("2015"),
        image: "php-personal-page.png",
        image_orientation: Landscape,
        repository: Some("php-personal-page"),
        demo: None,
        description: &[],
        section: PersonalPageEvolution,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProjectCatalog;

impl ProjectRepository for StaticProjectCatalog {
    fn list(&self) -> &[Project] {
        &PROJECTS
    }
}
