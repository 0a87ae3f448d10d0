//! Survey on awareness of violence against women.
//!
//! Five steps with several multi-choice questions. This variant runs
//! kiosk-style: after submission it shows the thank-you message briefly
//! and then resets for the next respondent.

use std::time::Duration;

use canvass::{Catalog, CatalogError, Question, Section};

/// Delay between a successful submission and the kiosk reset.
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(5);

/// Build the violence-awareness catalog.
pub fn violence_awareness() -> Result<Catalog, CatalogError> {
    let sections = vec![
        Section::new(
            "A",
            vec![
                Question::single(
                    "AgeGroup",
                    "Age Group : ",
                    [
                        "Under 18",
                        "18–24",
                        "25–34",
                        "35–44",
                        "45–54",
                        "55–64",
                        "65 and above",
                    ],
                ),
                Question::single("Location", "Location : ", ["Urban", "Semi-Urban", "Rural"]),
                Question::single(
                    "Gender",
                    "Which of the following best describes your gender identity? Please select all that apply.",
                    ["Male", "Female", "Other"],
                ),
                Question::text("StateOrUT", "State/Union Territory :  (Please specify)"),
                Question::single(
                    "Education",
                    "Education Level : ",
                    [
                        "No Formal Education",
                        "Primary Education",
                        "Secondary Education",
                        "Higher Secondary Education",
                        "Bachelor's Degree",
                        "Master's Degree or Higher",
                    ],
                ),
            ],
        ),
        Section::new(
            "B",
            vec![
                Question::single(
                    "ViolenceFamiliarity",
                    "Are you familiar with the term violence against women?",
                    [
                        "Very familiar",
                        "Somewhat familiar",
                        "Not very familiar",
                        "Not at all familiar",
                    ],
                ),
                Question::single(
                    "ViolenceAgainstWomen",
                    "Have you ever witnessed or experienced any form of violence against women?",
                    ["Yes", "No", "Prefer not to say"],
                ),
                Question::multi(
                    "ViolenceAgainstWomenTypes",
                    "Which of the following do you consider to be forms of violence against women? (Pick any or all that match your experience)",
                    [
                        "Physical assault (e.g., hitting, kicking, pushing)",
                        "Sexual assault or rape",
                        "Verbal abuse or name-calling",
                        "Isolating from friends/family, controlling finances",
                        "Stalking or persistent unwanted attention",
                        "Online harassment or cyberbullying",
                        "Emotional manipulation or gaslighting",
                        "Forced marriage or honor-based violence",
                        "Reproductive coercion (forcing pregnancy or abortion)",
                        "Denial of education or employment opportunities",
                    ],
                ),
            ],
        ),
        Section::new(
            "C",
            vec![
                Question::single(
                    "PhysicalViolence",
                    "In your opinion, how common is physical violence against women in your community?",
                    [
                        "Very common",
                        "Somewhat common",
                        "Not very common",
                        "Not at all common",
                        "Unsure",
                    ],
                ),
                Question::multi(
                    "PhysicalViolenceLocation",
                    "Where do you think physical violence against women most commonly occurs? (Pick any or all that match your experience)",
                    [
                        "At home",
                        "In public spaces",
                        "At work",
                        "In educational institutions",
                    ],
                ),
                Question::single(
                    "SexualViolence",
                    "How would you rate the prevalence of sexual violence against women in your community?",
                    ["Very high", "High", "Moderate", "Low", "Very low", "Unsure"],
                ),
                Question::multi(
                    "SexualViolenceType",
                    "Which form of sexual violence do you think is most underreported? (Pick any or all that match your experience)",
                    [
                        "Rape",
                        "Sexual assault",
                        "Unwanted touching or groping",
                        "Forced kissing",
                        "Sharing intimate images without consent",
                        "Coercion into sexual acts",
                    ],
                ),
            ],
        ),
        Section::new(
            "D",
            vec![
                Question::multi(
                    "SexualViolenceBarrier",
                    "In your opinion, what is the biggest barrier to reporting sexual violence? (Pick any or all that match your experience)",
                    [
                        "Fear of retaliation",
                        "Shame or stigma",
                        "Lack of trust in authorities",
                        "Fear of not being believed",
                        "Lack of awareness of rights and resources",
                    ],
                ),
                Question::single(
                    "EmotionalPsychologicalAbuse",
                    "Do you think emotional/psychological abuse is taken as seriously as physical violence?",
                    ["Yes", "No", "Unsure"],
                ),
                Question::single(
                    "EmotionalPsychologicalAbuseType",
                    "Which form of emotional/psychological abuse do you think is most common?",
                    [
                        "Name-calling or insulting",
                        "Constant criticism",
                        "Humiliation in public or private",
                        "Gaslighting",
                        "Threats",
                        "Isolation from friends and family",
                    ],
                ),
                Question::multi(
                    "CyberViolence",
                    "How prevalent do you think cyber violence is against women? (Pick any or all that match your experience)",
                    [
                        "Very prevalent",
                        "Somewhat prevalent",
                        "Not very prevalent",
                        "Not at all prevalent",
                        "Unsure",
                    ],
                ),
            ],
        ),
        Section::new(
            "E",
            vec![
                Question::single(
                    "CyberViolenceType",
                    "Which form of cyber violence do you think is most harmful?",
                    [
                        "Online harassment or bullying",
                        "Impersonation on social media",
                        "Revenge porn",
                        "Doxxing",
                    ],
                ),
                Question::single(
                    "CyberViolenceAction",
                    "If you witnessed violence against a woman, what would you most likely do?",
                    [
                        "Intervene directly",
                        "Call the authorities",
                        "Offer support to the victim afterwards",
                        "Nothing, out of fear or uncertainty",
                    ],
                ),
                Question::single(
                    "CyberViolenceAwareness",
                    "Are you aware of any local resources or organizations that support women experiencing violence?",
                    ["Yes", "No"],
                ),
            ],
        ),
    ];

    Ok(
        Catalog::new("Survey on Awareness of Violence Against Women", sections)?
            .with_welcome(
                "This survey aims to gather information about women's status and safety in \
                 India. Your responses are confidential and anonymous. You may skip any \
                 questions you're not comfortable answering.",
            )
            .with_thank_you(
                "Thank you for participating in this survey. Your responses are valuable and \
                 will contribute to understanding and improving the status of women in India.",
            ),
    )
}
