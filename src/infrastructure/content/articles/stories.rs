use crate::domain::article::{ArticleContent, Language};

const PROVINENCA_DESCONEGUDA_CA: ArticleContent = ArticleContent {
    title: "Provinença desconeguda",
    description: "Relat curt presentat al concurs de Sant Jordi de TMB de l'any 2020",
    share_sentence: None,
    introduction: r"<p>Encara és petita per trobar la resposta però, un cop s'ha formulat la pregunta, ja no ha pogut deixar de pensar-hi. L'Elisabet té vuit anys i la seva experiència amb el metro de Barcelona es limita a les parades del trajecte que fa cada dia amb el seu pare de camí a l'escola. Agafen la línia groga a la parada de Bogatell i baixen a Poblenou per arribar caminant fins a Les Acàcies.</p>",
    body: r"<p>Cada matí compta les parades en veu baixa, com qui resa, i cada matí el tren arriba del mateix túnel fosc. D'on ve, el metro? Ningú no l'hi ha sabut explicar.</p>
<p>El pare diu que de Trinitat Nova, però el cartell diu que hi torna. I si ve d'allà i hi torna, on dorm?</p>",
};

pub(super) fn provinenca_desconeguda(language: Language) -> Option<ArticleContent> {
    match language {
        Language::Ca => Some(PROVINENCA_DESCONEGUDA_CA),
        Language::En => None,
    }
}
