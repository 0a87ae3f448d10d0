//! End-to-end tests over the production catalogs.

use std::time::Instant;

use anyhow::Result;
use canvass::{Phase, ResetPolicy, TestTransport, Wizard};
use example_catalogs::{AUTO_RESET_DELAY, violence_awareness, womens_status};

#[test]
fn womens_status_catalog_is_valid() -> Result<()> {
    let catalog = womens_status()?;
    assert_eq!(catalog.step_count(), 6);
    assert_eq!(catalog.question_count(), 29);
    assert!(catalog.welcome().is_some());
    assert!(catalog.thank_you().is_some());

    // Only StateOrUT collects free text; nothing is multi-choice.
    assert!(catalog.questions().all(|q| !q.allows_multiple()));
    assert_eq!(
        catalog
            .questions()
            .filter(|q| q.is_text_input())
            .map(|q| q.key().as_str())
            .collect::<Vec<_>>(),
        vec!["StateOrUT"]
    );
    Ok(())
}

#[test]
fn violence_awareness_catalog_is_valid() -> Result<()> {
    let catalog = violence_awareness()?;
    assert_eq!(catalog.step_count(), 5);
    assert_eq!(catalog.question_count(), 18);
    assert!(catalog.welcome().is_some());
    assert!(catalog.thank_you().is_some());

    let multi: Vec<_> = catalog
        .questions()
        .filter(|q| q.allows_multiple())
        .map(|q| q.key().as_str())
        .collect();
    assert_eq!(
        multi,
        vec![
            "ViolenceAgainstWomenTypes",
            "PhysicalViolenceLocation",
            "SexualViolenceType",
            "SexualViolenceBarrier",
            "CyberViolence",
        ]
    );
    Ok(())
}

#[test]
fn record_key_set_matches_catalog_for_both_variants() -> Result<()> {
    for catalog in [womens_status()?, violence_awareness()?] {
        let expected: Vec<_> = catalog.questions().map(|q| q.key().clone()).collect();
        let wizard = Wizard::new(catalog);
        let record = wizard.assemble();
        let actual: Vec<_> = record.keys().cloned().collect();
        assert_eq!(actual, expected);
    }
    Ok(())
}

#[test]
fn full_walkthrough_womens_status() -> Result<()> {
    let mut wizard = Wizard::new(womens_status()?);
    wizard.start();

    wizard.select_single("AgeGroup", "25–34");
    wizard.select_single("Gender", "Female");
    wizard.set_free_text("StateOrUT", "Maharashtra");
    wizard.advance();

    wizard.select_single("EqualEducationOpportunities", "No");
    while !wizard.is_last_step() {
        wizard.advance();
    }
    wizard.select_single("NeedMoreLegalReforms", "Yes");

    let transport = TestTransport::new();
    wizard.submit(&transport)?;
    assert_eq!(wizard.phase(), Phase::ThankYou);

    let record = &transport.submissions()[0];
    assert_eq!(record.len(), 29);
    assert_eq!(record.get(&"AgeGroup".into()), Some("25–34"));
    assert_eq!(record.get(&"StateOrUT".into()), Some("Maharashtra"));
    assert_eq!(record.get(&"NeedMoreLegalReforms".into()), Some("Yes"));
    // Skipped questions travel as empty strings.
    assert_eq!(record.get(&"ConfidenceInPolice".into()), Some(""));
    Ok(())
}

#[test]
fn kiosk_walkthrough_violence_awareness() -> Result<()> {
    let mut wizard =
        Wizard::new(violence_awareness()?).with_reset_policy(ResetPolicy::After(AUTO_RESET_DELAY));
    wizard.start();

    wizard.select_single("AgeGroup", "18–24");
    wizard.advance();
    wizard.toggle_multiple("ViolenceAgainstWomenTypes", "Sexual assault or rape");
    wizard.toggle_multiple(
        "ViolenceAgainstWomenTypes",
        "Online harassment or cyberbullying",
    );
    while !wizard.is_last_step() {
        wizard.advance();
    }

    let transport = TestTransport::new();
    wizard.submit(&transport)?;
    let record = &transport.submissions()[0];
    assert_eq!(
        record.get(&"ViolenceAgainstWomenTypes".into()),
        Some("Sexual assault or rape, Online harassment or cyberbullying")
    );

    // After the kiosk delay the session is fresh for the next respondent.
    assert!(wizard.poll_reset(Instant::now() + AUTO_RESET_DELAY));
    assert_eq!(wizard.phase(), Phase::Welcome);
    assert!(wizard.answers().is_empty());
    assert_eq!(wizard.current_step(), 0);
    Ok(())
}
