use folio_domain::Language;
use folio_domain::content::{
    FooterCopy, HeroCopy, PhilosophyCopy, ProjectCopy, ProjectsCopy, SkillCategory, SkillsCopy,
    TranslationBundle, WritingCopy,
};

pub(crate) static DE: TranslationBundle = TranslationBundle {
    language: Language::De,
    hero: HeroCopy {
        subtitle: "Senior KI-Engineer & Technical Lead",
        headline1: "Architektur für",
        headline2: "Intelligenz.",
        description: "Spezialisiert auf den Weg von LLMs vom Prototyp zur Produktion. Ich \
                      überbrücke die Lücke zwischen Forschung und skalierbarem Product \
                      Engineering.",
        cta: "Kontakt aufnehmen",
        view_work: "Projekte ansehen",
        scroll: "Scrollen",
    },
    skills: SkillsCopy {
        label: "Kompetenzen",
        title: "Die Mind Map",
        categories: &[
            SkillCategory {
                title: "KI-Engineering",
                description: "Entwicklung und Deployment von produktionsreifen KI-Systemen. Von \
                              Modellarchitektur bis zur Inferenz-Optimierung.",
                tags: &["LLMs", "ML Pipelines", "RAG Systeme"],
            },
            SkillCategory {
                title: "LLM Ops",
                description: "End-to-End LLM Lifecycle Management. Fine-Tuning, Evaluation und \
                              Deployment im großen Maßstab.",
                tags: &["Fine-tuning", "Evaluation", "Monitoring"],
            },
            SkillCategory {
                title: "Produktstrategie",
                description: "Brücke zwischen technischen Möglichkeiten und Marktbedürfnissen. \
                              KI-Produkte, die Nutzer lieben.",
                tags: &["Roadmapping", "User Research", "GTM"],
            },
            SkillCategory {
                title: "System Design",
                description: "Architektur skalierbarer, resilienter Systeme, die Millionen von \
                              Anfragen souverän verarbeiten.",
                tags: &["Verteilte Systeme", "APIs", "Cloud"],
            },
            SkillCategory {
                title: "Team Leadership",
                description: "Aufbau hochperformanter Engineering-Teams. Mentoring, Hiring und \
                              Etablierung einer Engineering-Kultur.",
                tags: &["Mentorship", "Hiring", "Kultur"],
            },
        ],
    },
    projects: ProjectsCopy {
        label: "Portfolio",
        title: "Ausgewählte Arbeiten",
        items: &[
            ProjectCopy {
                title: "KI macht Schule",
                description: "Co-Founder einer Initiative, die KI-Bildung an deutsche Schulen \
                              bringt. Bundesweite Skalierung mit Partnern wie Google und PwC.",
                tags: &["EdTech", "Strategie", "Non-Profit"],
                link: Some("https://ki-macht-schule.de/"),
            },
            ProjectCopy {
                title: "Biometric Privacy & Vision",
                description: "Forschung zur Robustheit neuronaler Netze gegen Verdeckungen. \
                              Veröffentlichung vergleichender Studien zur \"Masked Face \
                              Recognition\"-Performance während der Pandemie.",
                tags: &["PyTorch", "Computer Vision", "Forschung"],
                link: None,
            },
            ProjectCopy {
                title: "Autonomous Edge Robotics",
                description: "Entwicklung eines Reinforcement-Learning-Stacks für selbstfahrende \
                              Fahrzeuge auf NVIDIA Jetson Nano Hardware. Deployment in 6 \
                              europäischen Ländern.",
                tags: &["Reinforcement Learning", "Edge AI", "IoT"],
                link: None,
            },
            ProjectCopy {
                title: "Enterprise AI Architecture",
                description: "Design von Data-Governance-Frameworks und \
                              Predictive-Maintenance-Use-Cases für internationale Automobil- und \
                              Pharmakunden.",
                tags: &["System Design", "Architektur", "Strategie"],
                link: None,
            },
        ],
    },
    writing: WritingCopy {
        label: "Texte",
        title: "Gedanken & Essays",
        back: "Zurück zu den Texten",
        step: "Schritt",
    },
    philosophy: PhilosophyCopy {
        label: "Prinzipien",
        title: "Engineering Prinzipien",
        paragraphs: &[
            "Die besten KI-Systeme sind unsichtbar. Sie fordern keine Aufmerksamkeit, sondern \
             funktionieren einfach.",
            "Mein Fokus liegt auf der stabilen Infrastruktur, die das erst ermöglicht. Ich \
             schätze einfache Architektur mehr als cleveren Code. Jedes System, das ich baue, \
             muss von Menschen lesbar, von Teams wartbar und von Nutzern vertrauenswürdig sein.",
            "Ich arbeite dort, wo Forschung auf Produktion trifft. Genau dort, wo Komplexität \
             oft Projekte scheitern lässt und wo Einfachheit den größten Wert schafft.",
        ],
        cta: "Meine Texte lesen",
    },
    footer: FooterCopy { copyright: "Mit Intention gebaut" },
};
