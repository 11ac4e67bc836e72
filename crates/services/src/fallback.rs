//! Static fallback deck.
//!
//! Used whenever the generator is unconfigured or fails, so a session can
//! always start. Ids are pre-numbered 1-based.

use garden_core::model::{Question, QuestionId};

struct Entry {
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

const DECK: [Entry; 15] = [
    Entry {
        text: "Which report established the three core principles of human research ethics: respect for persons, beneficence, and justice?",
        options: [
            "The Nuremberg Code",
            "The Belmont Report",
            "The Declaration of Geneva",
            "The Hippocratic Oath",
        ],
        correct: 1,
        explanation: "The 1979 Belmont Report articulated respect for persons, beneficence, and justice as the foundation of research ethics in the United States.",
    },
    Entry {
        text: "What is the primary purpose of informed consent?",
        options: [
            "To protect the institution from lawsuits",
            "To guarantee participants are paid fairly",
            "To ensure participants understand the research and join voluntarily",
            "To document the researcher's qualifications",
        ],
        correct: 2,
        explanation: "Informed consent operationalizes respect for persons: participation must be based on adequate understanding and free choice.",
    },
    Entry {
        text: "Which of the following groups is considered a vulnerable population in research?",
        options: [
            "University professors",
            "Professional athletes",
            "Children and prisoners",
            "Registered voters",
        ],
        correct: 2,
        explanation: "Children, prisoners, and others with limited autonomy or freedom require additional protections against coercion and undue influence.",
    },
    Entry {
        text: "The principle of beneficence obligates researchers to do what?",
        options: [
            "Maximize possible benefits and minimize possible harms",
            "Publish results as quickly as possible",
            "Recruit as many participants as possible",
            "Share data with other institutions",
        ],
        correct: 0,
        explanation: "Beneficence requires weighing risks against benefits and designing studies so that harm to participants is minimized.",
    },
    Entry {
        text: "What does the principle of justice demand in participant selection?",
        options: [
            "Selecting only participants likely to benefit",
            "A fair distribution of research burdens and benefits",
            "Prioritizing participants who volunteer first",
            "Excluding anyone with a medical condition",
        ],
        correct: 1,
        explanation: "Justice forbids placing the burdens of research on groups unlikely to share its benefits, such as recruiting only the disadvantaged.",
    },
    Entry {
        text: "What is the role of an ethics review board (IRB/REC) before a study begins?",
        options: [
            "To fund the proposed research",
            "To review the study's risks, consent process, and participant protections",
            "To recruit participants on behalf of researchers",
            "To analyze the study's data",
        ],
        correct: 1,
        explanation: "Independent review boards assess protocols before enrollment to ensure risks are justified and participants are protected.",
    },
    Entry {
        text: "A participant decides to leave a study halfway through. What is the researcher's obligation?",
        options: [
            "Require a written justification first",
            "Withhold any promised compensation",
            "Allow withdrawal at any time without penalty",
            "Continue using the participant's future data",
        ],
        correct: 2,
        explanation: "Voluntary participation includes the right to withdraw at any point without penalty or loss of entitled benefits.",
    },
    Entry {
        text: "What is the difference between anonymity and confidentiality?",
        options: [
            "They are the same thing",
            "Anonymous data can identify participants; confidential data cannot",
            "Anonymity means identities are never collected; confidentiality means they are protected",
            "Confidentiality only applies to medical research",
        ],
        correct: 2,
        explanation: "Anonymous data contains no identifiers at all, while confidential data links to identities that the researcher must protect.",
    },
    Entry {
        text: "When is deception permissible in research?",
        options: [
            "Never, under any circumstances",
            "Whenever it improves response rates",
            "Only when justified, risks are minimal, and participants are debriefed",
            "Only in commercial market research",
        ],
        correct: 2,
        explanation: "Deception requires strong scientific justification, minimal risk, and a debriefing that restores informed understanding.",
    },
    Entry {
        text: "A study involves children. In addition to parental permission, what should researchers seek?",
        options: [
            "The child's assent",
            "A court order",
            "A teacher's approval",
            "Nothing further",
        ],
        correct: 0,
        explanation: "Children who cannot legally consent should still be asked for assent, an age-appropriate agreement to take part.",
    },
    Entry {
        text: "What constitutes a conflict of interest in research?",
        options: [
            "Studying a topic the researcher finds interesting",
            "A financial or personal interest that could bias the research",
            "Collaborating with researchers at other universities",
            "Publishing in multiple journals",
        ],
        correct: 1,
        explanation: "Interests that could compromise, or appear to compromise, professional judgment must be disclosed and managed.",
    },
    Entry {
        text: "Which international document, adopted by the World Medical Association, guides ethics in medical research involving humans?",
        options: [
            "The Declaration of Helsinki",
            "The Geneva Convention",
            "The Kyoto Protocol",
            "The Oviedo Agreement",
        ],
        correct: 0,
        explanation: "The Declaration of Helsinki (1964, since revised) is the WMA's cornerstone statement on medical research ethics.",
    },
    Entry {
        text: "What does 'minimal risk' mean in research ethics?",
        options: [
            "The study involves no risk whatsoever",
            "Risks comparable to those of daily life or routine examinations",
            "Risks that only affect a minority of participants",
            "Risks the participant agrees to ignore",
        ],
        correct: 1,
        explanation: "Minimal risk means the probability and magnitude of harm are no greater than those ordinarily encountered in daily life.",
    },
    Entry {
        text: "How should researchers handle identifiable participant data?",
        options: [
            "Post it openly to support transparency",
            "Store it securely and restrict access to authorized staff",
            "Share it freely within the university",
            "Keep it indefinitely on personal devices",
        ],
        correct: 1,
        explanation: "Protecting privacy requires secure storage, access controls, and de-identification wherever the research permits.",
    },
    Entry {
        text: "Offering students extra course credit only if they join a study is ethically problematic because it may be:",
        options: [
            "Too expensive for the department",
            "Undue influence that undermines voluntary choice",
            "Unfair to students at other universities",
            "A breach of copyright",
        ],
        correct: 1,
        explanation: "Incentives tied to grades can pressure people into participating; ethical recruitment offers comparable alternatives.",
    },
];

/// Builds the 15-question fallback deck.
#[must_use]
pub fn fallback_questions() -> Vec<Question> {
    DECK.iter()
        .enumerate()
        .map(|(index, entry)| {
            Question::new(
                QuestionId::new(index as u32 + 1),
                entry.text,
                entry.options.iter().map(|&s| s.to_string()).collect(),
                entry.correct,
                entry.explanation,
            )
            .expect("fallback deck entries are valid")
        })
        .collect()
}
