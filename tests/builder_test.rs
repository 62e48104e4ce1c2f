use fragebogen::image_choice;
use fragebogen::registry::QuestionType;
use fragebogen::state::{Builder, SectionError};

#[tokio::test]
async fn test_default_workspace() {
    let builder = Builder::new();

    let view = builder.workspace().await;
    assert_eq!(view.selected_type, QuestionType::MultipleSingle);
    assert_eq!(view.question.title, "Multiple Choice (Einfachauswahl)");
    assert!(view.editing.is_none());
    assert!(builder.sections().await.is_empty());
}

#[tokio::test]
async fn test_select_type_discards_the_draft() {
    let builder = Builder::new();
    builder.set_title("Eigener Titel".to_string()).await;

    builder.select_type(QuestionType::Stars).await;

    let view = builder.workspace().await;
    assert_eq!(view.selected_type, QuestionType::Stars);
    assert_eq!(view.question.title, "Sterne-Bewertung");
    assert_eq!(view.question.setting_number("starCount"), Some(5.0));
}

#[tokio::test]
async fn test_select_type_cancels_an_edit_in_progress() {
    let builder = Builder::new();
    builder.save_section().await.unwrap();
    builder.edit_section(0).await;

    builder.select_type(QuestionType::Emoji).await;
    assert!(builder.workspace().await.editing.is_none());

    // The next save appends instead of overwriting section 0
    builder.save_section().await.unwrap();
    let sections = builder.sections().await;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].question_type, QuestionType::MultipleSingle);
    assert_eq!(sections[1].question_type, QuestionType::Emoji);
}

// --- Option editing tests ---

#[tokio::test]
async fn test_add_option_appends_a_numbered_entry() {
    let builder = Builder::new();

    assert!(builder.add_option("options").await);

    let question = builder.workspace().await.question;
    let options = &question.options["options"];
    assert_eq!(options.len(), 6);
    assert_eq!(options[5], "Option 6");
}

#[tokio::test]
async fn test_add_option_stops_at_the_group_maximum() {
    let builder = Builder::new();
    builder.select_type(QuestionType::YesNo).await;

    assert!(!builder.add_option("options").await);
    assert_eq!(builder.workspace().await.question.options["options"].len(), 2);
}

#[tokio::test]
async fn test_add_option_rejects_unknown_groups() {
    let builder = Builder::new();
    assert!(!builder.add_option("rows").await);
}

#[tokio::test]
async fn test_remove_option_respects_the_group_minimum() {
    let builder = Builder::new();

    // 5 default answers, minimum 2: three removals pass, the fourth is refused
    for _ in 0..3 {
        assert!(builder.remove_option("options", 0).await);
    }
    assert!(!builder.remove_option("options", 0).await);
    assert_eq!(builder.workspace().await.question.options["options"].len(), 2);
}

#[tokio::test]
async fn test_remove_option_ignores_out_of_range_indexes() {
    let builder = Builder::new();
    assert!(!builder.remove_option("options", 99).await);
}

#[tokio::test]
async fn test_set_option_overwrites_one_entry() {
    let builder = Builder::new();

    assert!(builder.set_option("options", 1, "Podcast".to_string()).await);
    assert_eq!(builder.workspace().await.question.options["options"][1], "Podcast");

    assert!(!builder.set_option("options", 99, "weg".to_string()).await);
}

// --- Settings tests ---

#[tokio::test]
async fn test_numeric_settings_are_parsed() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Stars).await;

    assert!(builder.set_setting("starCount", "7").await);
    let question = builder.workspace().await.question;
    assert_eq!(question.setting_number("starCount"), Some(7.0));
}

#[tokio::test]
async fn test_cleared_or_garbled_numeric_settings_are_removed() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Stars).await;

    builder.set_setting("starCount", "").await;
    assert_eq!(builder.workspace().await.question.setting_number("starCount"), None);

    builder.set_setting("starCount", "sieben").await;
    assert_eq!(builder.workspace().await.question.setting_number("starCount"), None);
}

#[tokio::test]
async fn test_text_settings_are_stored_verbatim() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Stars).await;

    builder.set_setting("leftLabel", "  Mies  ").await;
    assert_eq!(
        builder.workspace().await.question.setting_text("leftLabel"),
        Some("  Mies  ")
    );
}

#[tokio::test]
async fn test_unknown_setting_keys_are_rejected() {
    let builder = Builder::new();
    assert!(!builder.set_setting("starCount", "3").await);
}

// --- Section lifecycle tests ---

#[tokio::test]
async fn test_save_section_appends_and_resets_the_workspace() {
    let builder = Builder::new();
    builder.set_title("Erste Frage".to_string()).await;

    builder.save_section().await.unwrap();

    let sections = builder.sections().await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Erste Frage");

    let view = builder.workspace().await;
    assert_eq!(view.question.title, "Multiple Choice (Einfachauswahl)");
    assert!(view.editing.is_none());
}

#[tokio::test]
async fn test_save_section_requires_a_title() {
    let builder = Builder::new();
    builder.set_title("   ".to_string()).await;

    let result = builder.save_section().await;
    assert_eq!(result, Err(SectionError::MissingTitle));

    // Nothing saved, draft untouched
    assert!(builder.sections().await.is_empty());
    assert_eq!(builder.workspace().await.question.title, "   ");
}

#[tokio::test]
async fn test_save_section_requires_enough_non_blank_entries() {
    let builder = Builder::new();
    builder.select_type(QuestionType::YesNo).await;
    builder.set_option("options", 0, " ".to_string()).await;

    let result = builder.save_section().await;
    assert_eq!(
        result,
        Err(SectionError::TooFewEntries {
            label: "Antworten",
            min: 2,
        })
    );
}

#[tokio::test]
async fn test_edit_section_loads_a_copy() {
    let builder = Builder::new();
    builder.set_title("Original".to_string()).await;
    builder.save_section().await.unwrap();

    assert!(builder.edit_section(0).await);
    assert_eq!(builder.workspace().await.editing, Some(0));

    // The stored section only changes on the next save
    builder.set_title("Geändert".to_string()).await;
    assert_eq!(builder.sections().await[0].title, "Original");

    builder.save_section().await.unwrap();
    let sections = builder.sections().await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Geändert");
    assert!(builder.workspace().await.editing.is_none());
}

#[tokio::test]
async fn test_edit_section_switches_the_selected_type() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Stars).await;
    builder.save_section().await.unwrap();
    builder.select_type(QuestionType::Emoji).await;

    builder.edit_section(0).await;
    assert_eq!(builder.selected_type().await, QuestionType::Stars);
}

#[tokio::test]
async fn test_edit_section_ignores_out_of_range_indexes() {
    let builder = Builder::new();
    assert!(!builder.edit_section(0).await);
}

#[tokio::test]
async fn test_delete_section_adjusts_the_editing_index() {
    let builder = Builder::new();
    for title in ["A", "B", "C"] {
        builder.set_title(title.to_string()).await;
        builder.save_section().await.unwrap();
    }
    builder.edit_section(2).await;

    // Deleting in front of the edited section shifts the index down
    assert!(builder.delete_section(0).await);
    assert_eq!(builder.workspace().await.editing, Some(1));

    // Deleting the edited section cancels the edit
    assert!(builder.delete_section(1).await);
    assert!(builder.workspace().await.editing.is_none());

    let sections = builder.sections().await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "B");
}

#[tokio::test]
async fn test_delete_section_ignores_out_of_range_indexes() {
    let builder = Builder::new();
    assert!(!builder.delete_section(0).await);
}

#[tokio::test]
async fn test_finish_lists_sections_in_order() {
    let builder = Builder::new();
    builder.set_title("Eins".to_string()).await;
    builder.save_section().await.unwrap();
    builder.select_type(QuestionType::Stars).await;
    builder.set_title("Zwei".to_string()).await;
    builder.save_section().await.unwrap();

    let entries = builder.finish().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Eins");
    assert_eq!(entries[0].type_label, "Multiple Choice (Einfachauswahl)");
    assert_eq!(entries[1].title, "Zwei");
    assert_eq!(entries[1].type_label, "Sterne-Bewertung");
}

// --- Image attachment tests ---

fn sample_attachment() -> fragebogen::models::ImageAttachment {
    image_choice::attachment_from_upload(b"png-bytes", "logo.png", "image/png")
}

#[tokio::test]
async fn test_attach_image_only_works_on_image_questions() {
    let builder = Builder::new();
    assert!(!builder.attach_image(0, sample_attachment()).await);

    builder.select_type(QuestionType::Images).await;
    assert!(builder.attach_image(1, sample_attachment()).await);

    let question = builder.workspace().await.question;
    assert_eq!(question.image_choices.len(), 4);
    assert!(question.image_choices[1].is_some());
}

#[tokio::test]
async fn test_attach_image_ignores_out_of_range_indexes() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Images).await;
    assert!(!builder.attach_image(99, sample_attachment()).await);
}

#[tokio::test]
async fn test_clear_image_empties_the_slot() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Images).await;
    builder.attach_image(0, sample_attachment()).await;

    assert!(builder.clear_image(0).await);
    assert!(builder.workspace().await.question.image_choices[0].is_none());
}

#[tokio::test]
async fn test_image_store_follows_option_removal() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Images).await;
    builder.attach_image(1, sample_attachment()).await;

    builder.add_option("items").await;
    assert_eq!(builder.workspace().await.question.image_choices.len(), 5);

    builder.remove_option("items", 1).await;
    let question = builder.workspace().await.question;
    assert_eq!(question.image_choices.len(), 4);
    assert!(question.image_choices.iter().all(Option::is_none));
}

#[tokio::test]
async fn test_sections_keep_attached_images() {
    let builder = Builder::new();
    builder.select_type(QuestionType::Images).await;
    builder.attach_image(0, sample_attachment()).await;

    builder.save_section().await.unwrap();

    let sections = builder.sections().await;
    assert!(sections[0].image_choices[0].is_some());
}
