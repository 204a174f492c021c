//! The canonical article registry for the engineering log.
//!
//! Every article carries both language variants side by side; the writing
//! index and the article pages both derive from this single list, so the two
//! languages can never disagree about which articles exist.

use folio_domain::content::{ArticleEmbed, ArticleSection, ArticleText, LocalizedArticle};

/// Looks an article up by its slug.
#[must_use]
pub fn article_by_slug(slug: &str) -> Option<&'static LocalizedArticle> {
    ARTICLES.iter().find(|a| a.slug == slug)
}

pub static ARTICLES: &[LocalizedArticle] = &[
    LocalizedArticle {
        slug: "engineering-reliable-agents-with-ragas",
        date: "2026-01-24",
        embed: None,
        en: ArticleText {
            title: "Engineering Reliable Agents with Ragas",
            excerpt: "Moving beyond the \"Vibe Check\" by instrumenting LangChain agents with \
                      the RAG Triad metrics.",
            read_time: "10 min read",
            tags: &["Agents", "Testing", "Ragas", "LangChain"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Most agent demos pass review because somebody read three transcripts \
                         and nodded. That is not evaluation, that is a vibe check, and it breaks \
                         the first time a retriever index drifts or a prompt template changes.",
                        "Ragas gives you a small set of measurable proxies for the questions you \
                         actually care about: did the agent ground its answer in the retrieved \
                         context, did the context contain the answer at all, and did the answer \
                         address the question.",
                    ],
                },
                ArticleSection {
                    heading: Some("The RAG Triad"),
                    paragraphs: &[
                        "Faithfulness, context precision, and answer relevancy form a triad \
                         because each one fails independently. An agent can be faithful to \
                         irrelevant context, or relevant while hallucinating past its sources. \
                         Scoring all three per trace is what turns a demo into a system.",
                        "Wire the scoring into CI the same way you wire unit tests: a fixed \
                         question set, a frozen index snapshot, and thresholds that fail the \
                         build. The point is not the absolute number, it is the delta between \
                         yesterday and today.",
                    ],
                },
                ArticleSection {
                    heading: Some("Instrumenting the loop"),
                    paragraphs: &[
                        "Capture every tool call and every retrieved chunk as structured events, \
                         not log lines. Once traces are data, regression hunting becomes a \
                         query, and the conversation with stakeholders changes from \"it feels \
                         worse\" to \"faithfulness dropped four points after the chunking \
                         change.\"",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Entwicklung verlässlicher KI-Agenten mit Ragas",
            excerpt: "Jenseits des \"Vibe Check\": LangChain-Agenten mit den \
                      RAG-Triad-Metriken instrumentieren.",
            read_time: "10 Min. Lesezeit",
            tags: &["Agenten", "Testing", "Ragas", "LangChain"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Die meisten Agenten-Demos bestehen das Review, weil jemand drei \
                         Transkripte gelesen und genickt hat. Das ist keine Evaluation, das ist \
                         ein Vibe Check, und er scheitert, sobald ein Retriever-Index driftet \
                         oder ein Prompt-Template sich ändert.",
                        "Ragas liefert messbare Näherungen für die Fragen, die wirklich zählen: \
                         Hat der Agent seine Antwort im abgerufenen Kontext verankert, enthielt \
                         der Kontext die Antwort überhaupt, und beantwortet die Antwort die \
                         Frage.",
                    ],
                },
                ArticleSection {
                    heading: Some("Die RAG-Triade"),
                    paragraphs: &[
                        "Faithfulness, Context Precision und Answer Relevancy bilden eine \
                         Triade, weil jede Metrik unabhängig versagen kann. Ein Agent kann treu \
                         zu irrelevantem Kontext sein oder relevant antworten und dabei an \
                         seinen Quellen vorbei halluzinieren. Erst das Scoring aller drei pro \
                         Trace macht aus einer Demo ein System.",
                        "Verdrahten Sie das Scoring in die CI wie Unit-Tests: ein fixes \
                         Fragenset, ein eingefrorener Index-Snapshot und Schwellwerte, die den \
                         Build brechen. Es geht nicht um die absolute Zahl, sondern um das \
                         Delta zwischen gestern und heute.",
                    ],
                },
                ArticleSection {
                    heading: Some("Die Schleife instrumentieren"),
                    paragraphs: &[
                        "Erfassen Sie jeden Tool-Aufruf und jeden abgerufenen Chunk als \
                         strukturierte Events, nicht als Log-Zeilen. Sobald Traces Daten sind, \
                         wird die Regressionssuche zur Abfrage, und aus \"es fühlt sich \
                         schlechter an\" wird \"Faithfulness fiel nach der Chunking-Änderung um \
                         vier Punkte.\"",
                    ],
                },
            ],
        },
    },
    LocalizedArticle {
        slug: "data-mesh-the-hidden-engine",
        date: "2026-01-10",
        embed: None,
        en: ArticleText {
            title: "Data Mesh: The Hidden Engine of AI",
            excerpt: "Why your AI Agents are failing: They are trying to drink from a swamp. \
                      The model is not the bottleneck, the data architecture is.",
            read_time: "15 min read",
            tags: &["Data Architecture", "AI Agents"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Teams keep swapping models hoping for better agent behavior, while the \
                         agent's real diet is a centralized data lake nobody owns. You cannot \
                         prompt your way out of stale, undocumented, contradictory data.",
                        "A data mesh inverts the ownership: domain teams publish their data as \
                         products with contracts, freshness guarantees, and a named owner. The \
                         agent stops drinking from a swamp and starts ordering from a menu.",
                    ],
                },
                ArticleSection {
                    heading: Some("Data products, not pipelines"),
                    paragraphs: &[
                        "A pipeline is a mechanism; a product is a promise. The difference \
                         shows up at 3 a.m. when a schema changes. Contracts make the breakage \
                         a loud, attributable event instead of a silent quality decay that \
                         surfaces weeks later as \"the agent got dumber.\"",
                        "For retrieval systems this is existential: embeddings inherit every \
                         upstream defect and launder it into confident prose. Provenance \
                         metadata on each chunk is the only way to audit an answer after the \
                         fact.",
                    ],
                },
                ArticleSection {
                    heading: Some("Start with one domain"),
                    paragraphs: &[
                        "Mesh adoption fails as a big-bang reorg. Pick the domain whose data \
                         your most valuable agent consumes, give it a contract and an owner, \
                         and measure the agent's error rate before and after. The argument \
                         makes itself.",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Data Mesh: Der verborgene Motor der KI",
            excerpt: "Warum Ihre KI-Agenten scheitern: Sie versuchen, aus einem Sumpf zu \
                      trinken. Das Modell ist nicht der Engpass, die Datenarchitektur ist es.",
            read_time: "15 Min. Lesezeit",
            tags: &["Datenarchitektur", "KI-Agenten"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Teams tauschen Modelle aus und hoffen auf besseres Agentenverhalten, \
                         während die eigentliche Nahrung des Agenten ein zentraler Data Lake \
                         ist, den niemand verantwortet. Aus veralteten, undokumentierten, \
                         widersprüchlichen Daten kann kein Prompt einen Ausweg bauen.",
                        "Ein Data Mesh kehrt die Verantwortung um: Domänenteams publizieren \
                         ihre Daten als Produkte mit Verträgen, Freshness-Garantien und einem \
                         benannten Owner. Der Agent trinkt nicht mehr aus dem Sumpf, er \
                         bestellt von einer Karte.",
                    ],
                },
                ArticleSection {
                    heading: Some("Datenprodukte statt Pipelines"),
                    paragraphs: &[
                        "Eine Pipeline ist ein Mechanismus; ein Produkt ist ein Versprechen. \
                         Der Unterschied zeigt sich um drei Uhr nachts, wenn sich ein Schema \
                         ändert. Verträge machen den Bruch zu einem lauten, zuordenbaren \
                         Ereignis statt zu schleichendem Qualitätsverfall, der Wochen später \
                         als \"der Agent ist dümmer geworden\" auffällt.",
                        "Für Retrieval-Systeme ist das existenziell: Embeddings erben jeden \
                         Upstream-Defekt und waschen ihn in selbstbewusste Prosa. \
                         Provenance-Metadaten pro Chunk sind der einzige Weg, eine Antwort \
                         nachträglich zu auditieren.",
                    ],
                },
                ArticleSection {
                    heading: Some("Mit einer Domäne beginnen"),
                    paragraphs: &[
                        "Mesh-Einführung scheitert als Big-Bang-Reorganisation. Wählen Sie die \
                         Domäne, deren Daten Ihr wertvollster Agent konsumiert, geben Sie ihr \
                         Vertrag und Owner, und messen Sie die Fehlerrate des Agenten vorher \
                         und nachher. Das Argument führt sich selbst.",
                    ],
                },
            ],
        },
    },
    LocalizedArticle {
        slug: "prompt-engineering-that-actually-works",
        date: "2025-12-05",
        embed: None,
        en: ArticleText {
            title: "Prompt Engineering That Actually Works",
            excerpt: "Stop telling the model to 'Act as Steve Jobs.' The engineering reality \
                      of reliable prompting.",
            read_time: "8 min read",
            tags: &["AI Engineering", "Prompts"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Persona prompts are folklore. What moves output quality in production \
                         is structure: explicit output schemas, bounded context, and examples \
                         chosen for the failure modes you have actually observed.",
                    ],
                },
                ArticleSection {
                    heading: Some("Prompts are code"),
                    paragraphs: &[
                        "Version them, diff them, test them. A prompt change that is not \
                         accompanied by an evaluation run is a production deploy without CI. \
                         Most \"model got worse\" incidents trace back to an untracked prompt \
                         edit.",
                        "Treat few-shot examples as test fixtures: each one should exist \
                         because a real regression motivated it, and each one should be \
                         deletable the moment the base model handles the case.",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Prompt Engineering, das wirklich funktioniert",
            excerpt: "Hören Sie auf, dem Modell zu sagen, es soll 'wie Steve Jobs handeln.' \
                      Die technische Realität zuverlässiger Prompts.",
            read_time: "8 Min. Lesezeit",
            tags: &["KI-Engineering", "Prompts"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Persona-Prompts sind Folklore. Was die Qualität in Produktion wirklich \
                         bewegt, ist Struktur: explizite Output-Schemata, begrenzter Kontext \
                         und Beispiele, die nach tatsächlich beobachteten Fehlermodi gewählt \
                         sind.",
                    ],
                },
                ArticleSection {
                    heading: Some("Prompts sind Code"),
                    paragraphs: &[
                        "Versionieren, diffen, testen. Eine Prompt-Änderung ohne \
                         Evaluationslauf ist ein Produktions-Deploy ohne CI. Die meisten \
                         \"das Modell ist schlechter geworden\"-Vorfälle führen auf eine \
                         ungetrackte Prompt-Änderung zurück.",
                        "Behandeln Sie Few-Shot-Beispiele wie Test-Fixtures: Jedes existiert, \
                         weil eine echte Regression es motiviert hat, und jedes darf gelöscht \
                         werden, sobald das Basismodell den Fall beherrscht.",
                    ],
                },
            ],
        },
    },
    LocalizedArticle {
        slug: "future-of-ai-agents",
        date: "2025-08-15",
        embed: None,
        en: ArticleText {
            title: "The Future of AI Agents in Production Systems",
            excerpt: "Exploring the architectural patterns and challenges of deploying \
                      autonomous AI agents at scale.",
            read_time: "12 min read",
            tags: &["AI Agents", "Architecture"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "The gap between an agent that demos well and an agent that survives \
                         production is the same gap that separated microservice diagrams from \
                         running clusters a decade ago: failure handling, observability, and \
                         cost control.",
                    ],
                },
                ArticleSection {
                    heading: Some("Bounded autonomy"),
                    paragraphs: &[
                        "Give agents budgets, not permissions: a token budget, a tool-call \
                         budget, a wall-clock budget. Autonomy that cannot exhaust a budget \
                         cannot take down a system. Everything else is a timeout with better \
                         marketing.",
                        "The durable pattern is a planner that emits typed, inspectable steps \
                         and an executor that a human can audit. Free-form loops are research \
                         artifacts; production wants state machines.",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Die Zukunft von KI-Agenten in Produktionssystemen",
            excerpt: "Architekturmuster und Herausforderungen beim Deployment autonomer \
                      KI-Agenten im großen Maßstab.",
            read_time: "12 Min. Lesezeit",
            tags: &["KI-Agenten", "Architektur"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Die Lücke zwischen einem Agenten, der gut demonstriert, und einem, der \
                         Produktion überlebt, ist dieselbe, die vor einem Jahrzehnt \
                         Microservice-Diagramme von laufenden Clustern trennte: \
                         Fehlerbehandlung, Observability und Kostenkontrolle.",
                    ],
                },
                ArticleSection {
                    heading: Some("Begrenzte Autonomie"),
                    paragraphs: &[
                        "Geben Sie Agenten Budgets statt Berechtigungen: ein Token-Budget, ein \
                         Tool-Call-Budget, ein Wall-Clock-Budget. Autonomie, die kein Budget \
                         erschöpfen kann, kann kein System lahmlegen. Alles andere ist ein \
                         Timeout mit besserem Marketing.",
                        "Das tragfähige Muster ist ein Planner, der typisierte, inspizierbare \
                         Schritte emittiert, und ein Executor, den ein Mensch auditieren kann. \
                         Freilaufende Schleifen sind Forschungsartefakte; Produktion will \
                         Zustandsmaschinen.",
                    ],
                },
            ],
        },
    },
    LocalizedArticle {
        slug: "why-rag-systems-fail",
        date: "2025-06-12",
        embed: None,
        en: ArticleText {
            title: "Why RAG Systems Fail (And How to Fix Them)",
            excerpt: "Common pitfalls in retrieval-augmented generation and practical \
                      strategies for building robust systems.",
            read_time: "10 min read",
            tags: &["RAG", "LLMs"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "RAG failures are rarely generation failures. In almost every incident \
                         I have debugged, the model faithfully summarized the wrong, stale, or \
                         missing context it was handed. Fix retrieval first.",
                    ],
                },
                ArticleSection {
                    heading: Some("The three usual suspects"),
                    paragraphs: &[
                        "Chunking that severs answers from their preconditions, embedding \
                         models asked to bridge vocabulary gaps they were never trained for, \
                         and indexes that silently age while the source of truth moves on. \
                         Each one has a cheap diagnostic: log what was retrieved, not just \
                         what was answered.",
                        "A reranker is the highest-leverage component most teams skip. \
                         Doubling recall at the retriever and letting a cross-encoder pick is \
                         usually worth more than any prompt work.",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Warum RAG-Systeme scheitern (und wie man sie repariert)",
            excerpt: "Häufige Fallstricke bei Retrieval-Augmented Generation und praktische \
                      Strategien für robuste Systeme.",
            read_time: "10 Min. Lesezeit",
            tags: &["RAG", "LLMs"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "RAG-Fehler sind selten Generierungsfehler. In fast jedem Vorfall, den \
                         ich debuggt habe, hat das Modell den falschen, veralteten oder \
                         fehlenden Kontext treu zusammengefasst, den es bekommen hat. \
                         Reparieren Sie zuerst das Retrieval.",
                    ],
                },
                ArticleSection {
                    heading: Some("Die drei üblichen Verdächtigen"),
                    paragraphs: &[
                        "Chunking, das Antworten von ihren Voraussetzungen trennt, \
                         Embedding-Modelle, die Vokabellücken überbrücken sollen, für die sie \
                         nie trainiert wurden, und Indizes, die still altern, während die \
                         Wahrheit weiterzieht. Für jeden gibt es eine billige Diagnose: Loggen \
                         Sie, was abgerufen wurde, nicht nur, was geantwortet wurde.",
                        "Ein Reranker ist die Komponente mit dem größten Hebel, die die \
                         meisten Teams auslassen. Recall am Retriever verdoppeln und einen \
                         Cross-Encoder wählen lassen bringt meist mehr als jede Prompt-Arbeit.",
                    ],
                },
            ],
        },
    },
    LocalizedArticle {
        slug: "gradient-descent-explained",
        date: "2025-04-15",
        embed: Some(ArticleEmbed::DescentChart),
        en: ArticleText {
            title: "Algorithmic Fundamentals: Gradient Descent",
            excerpt: "Behind ChatGPT, Midjourney, and every modern neural network lies one \
                      simple, powerful idea for finding the \"bottom of the valley.\"",
            read_time: "12 min read",
            tags: &["AI Fundamentals", "Algorithms"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Imagine standing on a foggy mountainside and wanting to reach the \
                         valley floor. You cannot see the valley, but you can feel the slope \
                         under your feet. Step downhill, re-check the slope, step again. That \
                         is gradient descent, and it is the whole trick.",
                        "The loss landscape below is exactly that mountainside: each contour \
                         ring is a line of equal loss, and the glowing center is the minimum \
                         the optimizer is trying to reach. Watch the path feel its way down, \
                         overshooting and correcting, never moving in a straight line.",
                    ],
                },
                ArticleSection {
                    heading: Some("Why the path zigzags"),
                    paragraphs: &[
                        "Stochastic gradient descent estimates the slope from a small batch of \
                         data, so every step is slightly wrong. The noise looks wasteful, but \
                         it is a feature: it shakes the optimizer out of shallow dips that \
                         would trap an exact method.",
                        "The step size is the real engineering knob. Too large and the path \
                         ricochets across the valley; too small and training takes geological \
                         time. Every learning-rate schedule ever published is a negotiation \
                         with this trade-off.",
                    ],
                },
                ArticleSection {
                    heading: Some("From valleys to language models"),
                    paragraphs: &[
                        "Scale the same idea to billions of dimensions and you have modern \
                         deep learning. Nothing about the algorithm changes, only the terrain: \
                         the valley becomes a landscape no human can visualize, navigated by \
                         the same humble rule of stepping downhill.",
                    ],
                },
            ],
        },
        de: ArticleText {
            title: "Algorithmische Grundlagen: Gradient Descent",
            excerpt: "Hinter ChatGPT, Midjourney und jedem modernen neuronalen Netzwerk steckt \
                      eine einfache, mächtige Idee: das \"Tal\" zu finden.",
            read_time: "12 Min. Lesezeit",
            tags: &["KI-Grundlagen", "Algorithmen"],
            sections: &[
                ArticleSection {
                    heading: None,
                    paragraphs: &[
                        "Stellen Sie sich vor, Sie stehen im Nebel an einem Berghang und \
                         wollen ins Tal. Sie sehen das Tal nicht, aber Sie spüren das Gefälle \
                         unter den Füßen. Ein Schritt bergab, Gefälle neu prüfen, nächster \
                         Schritt. Das ist Gradient Descent, und das ist der ganze Trick.",
                        "Die Loss-Landschaft unten ist genau dieser Berghang: Jeder \
                         Konturring ist eine Linie gleichen Verlusts, und das leuchtende \
                         Zentrum ist das Minimum, das der Optimierer erreichen will. Sehen \
                         Sie zu, wie sich der Pfad hinuntertastet, überschießt und korrigiert, \
                         nie in gerader Linie.",
                    ],
                },
                ArticleSection {
                    heading: Some("Warum der Pfad zickzackt"),
                    paragraphs: &[
                        "Stochastic Gradient Descent schätzt das Gefälle aus einem kleinen \
                         Daten-Batch, jeder Schritt ist also leicht falsch. Das Rauschen wirkt \
                         verschwenderisch, ist aber ein Feature: Es schüttelt den Optimierer \
                         aus flachen Mulden, in denen ein exaktes Verfahren hängen bliebe.",
                        "Die Schrittweite ist der eigentliche Engineering-Regler. Zu groß, und \
                         der Pfad prallt durchs Tal; zu klein, und das Training dauert \
                         geologische Zeiträume. Jeder je publizierte Learning-Rate-Schedule \
                         ist eine Verhandlung mit diesem Zielkonflikt.",
                    ],
                },
                ArticleSection {
                    heading: Some("Vom Tal zum Sprachmodell"),
                    paragraphs: &[
                        "Skalieren Sie dieselbe Idee auf Milliarden Dimensionen und Sie haben \
                         modernes Deep Learning. Am Algorithmus ändert sich nichts, nur am \
                         Gelände: Das Tal wird zu einer Landschaft, die kein Mensch \
                         visualisieren kann, navigiert mit derselben bescheidenen Regel, \
                         bergab zu gehen.",
                    ],
                },
            ],
        },
    },
];
