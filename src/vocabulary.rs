//! Localized default section labels.
//!
//! The assembler looks labels up by the detected language code; any code
//! without a table deterministically falls back to English. Only the
//! languages the metadata detector can produce carry tables.

/// Default section labels for one language: seven front-matter labels,
/// three placeholder chapter names, six back-matter labels.
pub struct SectionVocabulary {
    pub front: [&'static str; 7],
    pub main: [&'static str; 3],
    pub back: [&'static str; 6],
}

impl SectionVocabulary {
    /// Label for the mandatory title-page slot
    pub fn title_page(&self) -> &'static str {
        self.front[1]
    }

    /// Label for the mandatory copyright slot
    pub fn copyright(&self) -> &'static str {
        self.front[2]
    }
}

const ENGLISH: SectionVocabulary = SectionVocabulary {
    front: [
        "Title",
        "Title Page",
        "Copyright",
        "Dedication",
        "Acknowledgments",
        "Foreword",
        "Introduction",
    ],
    main: ["Chapter 1", "Chapter 2", "Chapter 3"],
    back: [
        "Appendix",
        "Glossary",
        "Bibliography",
        "Index",
        "About the Author",
        "Notes",
    ],
};

const SPANISH: SectionVocabulary = SectionVocabulary {
    front: [
        "Título",
        "Portada",
        "Derechos de autor",
        "Dedicatoria",
        "Agradecimientos",
        "Prólogo",
        "Introducción",
    ],
    main: ["Capítulo 1", "Capítulo 2", "Capítulo 3"],
    back: [
        "Apéndice",
        "Glosario",
        "Bibliografía",
        "Índice",
        "Sobre el autor",
        "Notas",
    ],
};

const FRENCH: SectionVocabulary = SectionVocabulary {
    front: [
        "Titre",
        "Page de titre",
        "Droits d'auteur",
        "Dédicace",
        "Remerciements",
        "Avant-propos",
        "Introduction",
    ],
    main: ["Chapitre 1", "Chapitre 2", "Chapitre 3"],
    back: [
        "Annexe",
        "Glossaire",
        "Bibliographie",
        "Index",
        "À propos de l'auteur",
        "Notes",
    ],
};

const GERMAN: SectionVocabulary = SectionVocabulary {
    front: [
        "Titel",
        "Titelseite",
        "Urheberrecht",
        "Widmung",
        "Danksagung",
        "Vorwort",
        "Einleitung",
    ],
    main: ["Kapitel 1", "Kapitel 2", "Kapitel 3"],
    back: [
        "Anhang",
        "Glossar",
        "Bibliographie",
        "Register",
        "Über den Autor",
        "Anmerkungen",
    ],
};

const PORTUGUESE: SectionVocabulary = SectionVocabulary {
    front: [
        "Título",
        "Folha de rosto",
        "Direitos autorais",
        "Dedicatória",
        "Agradecimentos",
        "Prefácio",
        "Introdução",
    ],
    main: ["Capítulo 1", "Capítulo 2", "Capítulo 3"],
    back: [
        "Apêndice",
        "Glossário",
        "Bibliografia",
        "Índice",
        "Sobre o autor",
        "Notas",
    ],
};

/// Look up the section vocabulary for a language code, falling back to
/// English for anything unrecognized.
pub fn vocabulary_for(language: &str) -> &'static SectionVocabulary {
    match language {
        "es" => &SPANISH,
        "fr" => &FRENCH,
        "de" => &GERMAN,
        "pt" => &PORTUGUESE,
        _ => &ENGLISH,
    }
}
