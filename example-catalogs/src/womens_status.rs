//! Survey on women's status and safety in India.
//!
//! Six steps: demographics plus sections A through E. All questions are
//! single-choice except the free-text `StateOrUT`. This variant keeps the
//! thank-you phase terminal (no kiosk reset).

use canvass::{Catalog, CatalogError, Question, Section};

/// Build the women's status and safety catalog.
pub fn womens_status() -> Result<Catalog, CatalogError> {
    let sections = vec![
        Section::new(
            "Demographic Information (Optional but Helpful for Analysis):",
            vec![
                Question::single(
                    "AgeGroup",
                    "Age Group:",
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
                Question::single("Gender", "Gender:", ["Female", "Male", "Prefer not to say"]),
                Question::single("Location", "Location:", ["Urban", "Semi-Urban", "Rural"]),
                Question::text("StateOrUT", "State/Union Territory: (Please specify)"),
                Question::single(
                    "EducationLevel",
                    "Education Level:",
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
            "Section A: Girl Child Discrimination",
            vec![
                Question::single(
                    "EqualEducationOpportunities",
                    "Do you believe that girls and boys are given equal opportunities in education in India?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "ChildGenderPreference",
                    "In your community, is there a preference for male children over female children?",
                    [
                        "Strong preference for males",
                        "Slight preference for males",
                        "No preference",
                        "Slight preference for females",
                        "Strong preference for females",
                    ],
                ),
                Question::single(
                    "ObservedGirlChildDiscrimination",
                    "Have you observed or experienced discrimination against girl children in your family or community?",
                    ["Yes, frequently", "Yes, occasionally", "No"],
                ),
                Question::single(
                    "DowryContributesToDiscrimination",
                    "Do you think dowry practices contribute to discrimination against the girl child?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "AwareOfGirlChildSchemes",
                    "Are you aware of government schemes like Beti Bachao Beti Padhao aimed at improving the status of the girl child?",
                    ["Yes", "No"],
                ),
            ],
        ),
        Section::new(
            "Section B: Women's Safety",
            vec![
                Question::single(
                    "SafetyWalkingAloneAtNight",
                    "How safe do you feel walking alone in your neighborhood after dark?",
                    [
                        "Very Safe",
                        "Somewhat Safe",
                        "Neutral",
                        "Somewhat Unsafe",
                        "Very Unsafe",
                    ],
                ),
                Question::single(
                    "AlteredRoutineDueToSafety",
                    "Have you ever altered your daily routine due to safety concerns (e.g., changed routes, avoided certain areas)?",
                    ["Yes, frequently", "Yes, occasionally", "No"],
                ),
                Question::single(
                    "PublicTransportSafety",
                    "Do you believe that public transportation in your area is safe for women?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "ExperiencedPublicHarassment",
                    "Have you experienced any form of harassment in public places (e.g., eve teasing, pinching, inappropriate touching)?",
                    ["Yes", "No", "Prefer not to say"],
                ),
                Question::single(
                    "AwareOfSafetyHelplines",
                    "Are you aware of helpline numbers or resources available for women's safety in India (e.g., 1091, 181)?",
                    ["Yes", "No"],
                ),
            ],
        ),
        Section::new(
            "Section C: Women's Rights and Discrimination",
            vec![
                Question::single(
                    "EqualEmploymentOpportunities",
                    "Do you believe that women have equal employment opportunities compared to men in India?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "FacedWorkplaceDiscrimination",
                    "Have you ever faced discrimination at the workplace due to your gender?",
                    ["Yes", "No", "Not Applicable"],
                ),
                Question::single(
                    "SocietalExpectationsLimitWomen",
                    "Do you agree that societal expectations limit women’s choices in career and personal life?",
                    [
                        "Strongly Agree",
                        "Agree",
                        "Neutral",
                        "Disagree",
                        "Strongly Disagree",
                    ],
                ),
                Question::single(
                    "DomesticViolenceSeriousIssue",
                    "In your opinion, is domestic violence a serious issue affecting women in India?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "AwareOfDomesticViolenceAct",
                    "Are you aware of legal provisions like the Protection of Women from Domestic Violence Act, 2005?",
                    ["Yes", "No"],
                ),
            ],
        ),
        Section::new(
            "Section D: General Facilities for Women by the Government",
            vec![
                Question::single(
                    "SufficientHealthcareFacilities",
                    "Do you think the government provides sufficient healthcare facilities specifically for women (e.g., maternal health services)?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "BenefitedFromWelfareSchemes",
                    "Have you or someone you know benefited from government schemes aimed at women’s welfare (e.g., Janani Suraksha Yojana, Sukanya Samriddhi Yojana)?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "SatisfactionWithSanitationFacilities",
                    "Are you satisfied with the availability of public sanitation facilities (e.g., toilets) for women in your area?",
                    [
                        "Very Satisfied",
                        "Satisfied",
                        "Neutral",
                        "Dissatisfied",
                        "Very Dissatisfied",
                    ],
                ),
                Question::single(
                    "GovtInitiativesImprovedStatus",
                    "Do you believe that government initiatives have improved the status of women in society over the past decade?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "AwareOfEducationEmpowermentPrograms",
                    "Are you aware of any government programs promoting women’s education and empowerment?",
                    ["Yes", "No"],
                ),
            ],
        ),
        Section::new(
            "Section E: Impact of the Legal System on Women's Lives",
            vec![
                Question::single(
                    "LegalSystemProtectsRights",
                    "Do you feel that the legal system in India adequately protects women’s rights?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "ConfidenceInPolice",
                    "Are you confident in the police’s ability to handle cases related to crimes against women?",
                    [
                        "Very Confident",
                        "Somewhat Confident",
                        "Neutral",
                        "Somewhat Unconfident",
                        "Not Confident at All",
                    ],
                ),
                Question::single(
                    "LegalProcessesAccessible",
                    "Do you believe that legal processes (e.g., courts, legal aid) are accessible to women who seek justice?",
                    ["Yes", "No", "Not Sure"],
                ),
                Question::single(
                    "AmendmentActEffect",
                    "Have laws like the Criminal Law (Amendment) Act, 2013 (following the Nirbhaya case) made you feel safer?",
                    ["Yes", "No", "Not Aware of the Act"],
                ),
                Question::single(
                    "NeedMoreLegalReforms",
                    "Do you think more legal reforms are needed to improve women’s safety and rights in India?",
                    ["Yes", "No", "Not Sure"],
                ),
            ],
        ),
    ];

    Ok(Catalog::new("Survey on Women's Status and Safety in India", sections)?
        .with_welcome(
            "This survey aims to gather information about women's status and safety in India. \
             Your responses are confidential and anonymous. You may skip any questions you're \
             not comfortable answering.",
        )
        .with_thank_you(
            "Thank you for participating in this survey. Your responses are valuable and will \
             contribute to understanding and improving the status of women in India.",
        ))
}
