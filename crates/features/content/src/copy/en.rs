use folio_domain::Language;
use folio_domain::content::{
    FooterCopy, HeroCopy, PhilosophyCopy, ProjectCopy, ProjectsCopy, SkillCategory, SkillsCopy,
    TranslationBundle, WritingCopy,
};

pub(crate) static EN: TranslationBundle = TranslationBundle {
    language: Language::En,
    hero: HeroCopy {
        subtitle: "Senior AI Engineer & Technical Lead",
        headline1: "Architecting",
        headline2: "Intelligence.",
        description: "Specializing in moving LLMs from prototype to production. I bridge the gap \
                      between research science and scalable product engineering.",
        cta: "Get in Touch",
        view_work: "View Work",
        scroll: "Scroll",
    },
    skills: SkillsCopy {
        label: "Capabilities",
        title: "The Mind Map",
        categories: &[
            SkillCategory {
                title: "AI Engineering",
                description: "Designing and deploying production-grade AI systems. From model \
                              architecture to inference optimization.",
                tags: &["LLMs", "ML Pipelines", "RAG Systems"],
            },
            SkillCategory {
                title: "LLM Ops",
                description: "End-to-end LLM lifecycle management. Fine-tuning, evaluation, and \
                              deployment at scale.",
                tags: &["Fine-tuning", "Evaluation", "Monitoring"],
            },
            SkillCategory {
                title: "Product Strategy",
                description: "Bridging technical capabilities with market needs. Building AI \
                              products that users love.",
                tags: &["Roadmapping", "User Research", "GTM"],
            },
            SkillCategory {
                title: "System Design",
                description: "Architecting scalable, resilient systems that handle millions of \
                              requests with grace.",
                tags: &["Distributed Systems", "APIs", "Cloud"],
            },
            SkillCategory {
                title: "Team Leadership",
                description: "Growing high-performance engineering teams. Mentoring, hiring, and \
                              establishing engineering culture.",
                tags: &["Mentorship", "Hiring", "Culture"],
            },
        ],
    },
    projects: ProjectsCopy {
        label: "Portfolio",
        title: "Selected Works",
        items: &[
            ProjectCopy {
                title: "KI macht Schule",
                description: "Co-Founder of an initiative bringing AI education to German \
                              schools. Scaled to nationwide adoption with partners like Google \
                              and PwC.",
                tags: &["EdTech", "Strategy", "Non-Profit"],
                link: Some("https://ki-macht-schule.de/"),
            },
            ProjectCopy {
                title: "Biometric Privacy & Vision",
                description: "Researching neural network robustness against occlusions. \
                              Published comparative studies on \"Masked Face Recognition\" \
                              performance during the pandemic.",
                tags: &["PyTorch", "Computer Vision", "Research"],
                link: None,
            },
            ProjectCopy {
                title: "Autonomous Edge Robotics",
                description: "Developed a Reinforcement Learning stack for self-driving vehicles \
                              on NVIDIA Jetson Nano hardware. Deployed across 6 European \
                              countries.",
                tags: &["Reinforcement Learning", "Edge AI", "IoT"],
                link: None,
            },
            ProjectCopy {
                title: "Enterprise AI Architecture",
                description: "Designing data governance frameworks and predictive maintenance \
                              use-cases for international automotive and pharma clients.",
                tags: &["System Design", "Architecture", "Strategy"],
                link: None,
            },
        ],
    },
    writing: WritingCopy {
        label: "Writing",
        title: "Thoughts & Essays",
        back: "Back to writing",
        step: "Step",
    },
    philosophy: PhilosophyCopy {
        label: "Principles",
        title: "Engineering Principles",
        paragraphs: &[
            "The best AI systems are invisible. They do not demand attention; they just work.",
            "My focus is building the boring, reliable infrastructure that makes this possible. \
             I value simple architecture over clever code. Every system I build is designed to \
             be read by humans, maintained by teams, and trusted by users.",
            "I operate where research meets production. This is where complexity usually kills \
             projects, and where simplicity creates the most value.",
        ],
        cta: "Read my writing",
    },
    footer: FooterCopy { copyright: "Built with intention" },
};
