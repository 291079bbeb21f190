use beacon_engine::{FieldValidator, RecordingSink, SubmissionWizard, WizardError};
use beacon_types::{
    AttachmentEvent, Category, FieldName, FieldRule, FileHandle, NavAction, NoticeKind, RejectionReason, Section,
    WizardMsg, WizardStatus,
};
use beacon_util::{AttachmentPolicy, SubmissionConfig};

fn new_wizard() -> (SubmissionWizard, RecordingSink) {
    let sink = RecordingSink::new();
    let wizard = SubmissionWizard::new(&SubmissionConfig::default(), sink.clone());
    (wizard, sink)
}

fn fill_valid_fields(wizard: &mut SubmissionWizard, title: &str) {
    let values = [
        (FieldName::Title, title.to_string()),
        (FieldName::Abstract, "x".repeat(150)),
        (FieldName::Keywords, "ai, ml".to_string()),
        (FieldName::Category, "medicine".to_string()),
        (FieldName::AuthorFirstName, "Ada".to_string()),
        (FieldName::AuthorLastName, "Lovelace".to_string()),
        (FieldName::AuthorEmail, "a@b.com".to_string()),
        (FieldName::AuthorAffiliation, "Analytical Society".to_string()),
    ];
    for (field, value) in values {
        wizard.on_field_change(field, value).expect("wizard open");
    }
}

fn attach(wizard: &mut SubmissionWizard, name: &str, size_bytes: u64) {
    wizard
        .on_attachment_event(AttachmentEvent::Pick {
            file: FileHandle::new(name, size_bytes),
        })
        .expect("attach file");
}

#[test]
fn short_title_with_attachment_is_rejected_by_title_rule() {
    let (mut wizard, sink) = new_wizard();
    fill_valid_fields(&mut wizard, "Hi");
    attach(&mut wizard, "paper.pdf", 2048);

    let outcome = wizard.on_submit().expect("wizard open");
    assert_eq!(
        outcome.rejection(),
        Some(&RejectionReason::FieldInvalid {
            field: FieldName::Title,
            rule: FieldRule::MinLength(5),
        })
    );
    let title = FieldValidator::default().validate_field(wizard.draft(), FieldName::Title);
    assert!(!title.valid);
    assert!(!wizard.validation(FieldName::Title).expect("title evaluated").valid);

    let notices = sink.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Destructive);
}

#[test]
fn valid_fields_without_attachment_are_rejected_as_missing_file() {
    let (mut wizard, sink) = new_wizard();
    fill_valid_fields(&mut wizard, "Climate Models");

    let outcome = wizard.on_submit().expect("wizard open");
    assert_eq!(outcome.rejection(), Some(&RejectionReason::MissingFile));
    assert_eq!(outcome.rejection().map(RejectionReason::as_str), Some("missing-file"));

    let notices = sink.notices();
    assert_eq!(notices[0].title, "Missing manuscript file");
}

#[test]
fn empty_draft_without_attachment_is_still_missing_file() {
    let (mut wizard, _sink) = new_wizard();
    let outcome = wizard.on_submit().expect("wizard open");
    assert_eq!(outcome.rejection(), Some(&RejectionReason::MissingFile));
}

#[test]
fn complete_submission_is_accepted_and_terminal() {
    let (mut wizard, sink) = new_wizard();
    fill_valid_fields(&mut wizard, "Climate Models");
    attach(&mut wizard, "draft.pdf", 10);
    attach(&mut wizard, "final.pdf", 250_880);

    let outcome = wizard.on_submit().expect("wizard open");
    let payload = outcome.payload().expect("accepted");
    assert_eq!(payload.title, "Climate Models");
    assert_eq!(payload.category, Category::Medicine);
    assert_eq!(payload.author_email, "a@b.com");
    assert_eq!(payload.file_name, "final.pdf");
    assert_eq!(payload.file_size_bytes, 250_880);
    assert_eq!(wizard.status(), &WizardStatus::Accepted);
    assert_eq!(sink.notices()[0].title, "Submission received!");

    assert_eq!(wizard.on_submit(), Err(WizardError::Finished));
    assert_eq!(
        wizard.on_field_change(FieldName::Title, "Another"),
        Err(WizardError::Finished)
    );

    wizard.restart();
    assert_eq!(wizard.status(), &WizardStatus::Editing(Section::Manuscript));
    assert!(wizard.draft().title.is_empty());
    assert!(wizard.attachment().is_none());
}

#[test]
fn navigation_is_not_gated_by_validity() {
    let (mut wizard, _sink) = new_wizard();
    wizard.on_field_change(FieldName::Title, "Hi").expect("wizard open");
    assert_eq!(wizard.on_navigate(NavAction::GoTo(Section::Upload)), Ok(Section::Upload));
    assert_eq!(wizard.on_navigate(NavAction::Next), Ok(Section::Upload));
    assert_eq!(wizard.current_section(), Section::Upload);
}

#[test]
fn retry_after_rejection_succeeds_without_reentering_data() {
    let (mut wizard, sink) = new_wizard();
    fill_valid_fields(&mut wizard, "Climate Models");
    wizard.on_navigate(NavAction::GoTo(Section::Upload)).expect("wizard open");

    assert!(!wizard.on_submit().expect("wizard open").is_accepted());
    wizard
        .on_attachment_event(AttachmentEvent::DragEnter)
        .expect("wizard open");
    assert!(wizard.is_drag_active());
    wizard
        .on_attachment_event(AttachmentEvent::Drop {
            file: Some(FileHandle::new("paper.docx", 4096)),
        })
        .expect("wizard open");
    assert!(!wizard.is_drag_active());

    assert!(wizard.on_submit().expect("wizard open").is_accepted());
    assert_eq!(sink.notices().len(), 2);
}

#[test]
fn change_file_clears_the_candidate() {
    let (mut wizard, _sink) = new_wizard();
    fill_valid_fields(&mut wizard, "Climate Models");
    attach(&mut wizard, "paper.pdf", 10);
    wizard.on_attachment_event(AttachmentEvent::Clear).expect("wizard open");
    assert!(wizard.attachment().is_none());
    assert_eq!(
        wizard.on_submit().expect("wizard open").rejection(),
        Some(&RejectionReason::MissingFile)
    );
}

#[test]
fn enforced_policy_surfaces_attachment_errors() {
    let config = SubmissionConfig {
        attachment: AttachmentPolicy {
            enforce: true,
            ..AttachmentPolicy::default()
        },
        ..SubmissionConfig::default()
    };
    let mut wizard = SubmissionWizard::new(&config, RecordingSink::new());
    let err = wizard
        .on_attachment_event(AttachmentEvent::Pick {
            file: FileHandle::new("virus.exe", 10),
        })
        .expect_err("rejected by policy");
    assert!(matches!(err, WizardError::Attachment(_)));
    assert!(wizard.attachment().is_none());
}

#[test]
fn restricted_catalog_rejects_other_categories() {
    let config = SubmissionConfig {
        categories: vec![Category::Humanities],
        ..SubmissionConfig::default()
    };
    let mut wizard = SubmissionWizard::new(&config, RecordingSink::new());
    let result = wizard
        .on_field_change(FieldName::Category, "medicine")
        .expect("wizard open");
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some("Please select a category."));
}

#[test]
fn scripted_messages_drive_the_same_state_machine() {
    let (mut wizard, _sink) = new_wizard();
    let script = vec![
        WizardMsg::Navigate(NavAction::GoTo(Section::Upload)),
        WizardMsg::Attachment(AttachmentEvent::Pick {
            file: FileHandle::new("paper.pdf", 1024),
        }),
        WizardMsg::Submit,
    ];
    let mut effects = Vec::new();
    for msg in script {
        effects.extend(wizard.update(msg).expect("wizard open"));
    }
    assert_eq!(effects.len(), 3);
    assert_eq!(
        wizard.status(),
        &WizardStatus::Rejected {
            section: Section::Upload,
            reason: RejectionReason::FieldInvalid {
                field: FieldName::Title,
                rule: FieldRule::MinLength(5),
            },
        }
    );
    assert_eq!(wizard.validations().len(), FieldName::ALL.len());
}
