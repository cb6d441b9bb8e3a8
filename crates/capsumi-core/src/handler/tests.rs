//! Tests for handler module

use mockall::predicate::eq;
use mockall::Sequence;

use super::*;
use crate::content::{Author, ContentCard};
use crate::message::ModalTarget;
use crate::section::Section;
use crate::theme::MockPresentationMode;

fn test_card(title: &str) -> ContentCard {
    ContentCard::new(title, format!("Description of {title}"))
}

/// Mock that fails the test if the theme setter is ever called
fn untouched_presentation() -> MockPresentationMode {
    let mut mock = MockPresentationMode::new();
    mock.expect_apply().never();
    mock
}

#[test]
fn test_open_modal_sets_content() {
    let mut state = UiState::new();
    let card = test_card("Milestone 1").with_authors(vec![Author {
        name: "Name Surname".to_string(),
        document_url: "/assignments/author1.pdf".to_string(),
    }]);

    let result = update(&mut state, Message::OpenModal(card.clone()));

    assert_eq!(result, UpdateResult::none());
    assert!(state.is_modal_open());
    assert_eq!(state.modal, Some(card));
}

#[test]
fn test_open_modal_replaces_previous_card() {
    let mut state = UiState::new();
    update(&mut state, Message::OpenModal(test_card("First")));
    update(&mut state, Message::OpenModal(test_card("Second")));

    assert_eq!(state.modal.map(|c| c.title), Some("Second".to_string()));
}

#[test]
fn test_close_modal_clears_content() {
    let mut state = UiState::new();
    update(&mut state, Message::OpenModal(test_card("Assignment 2")));

    update(&mut state, Message::CloseModal);

    assert!(!state.is_modal_open());
    assert!(state.modal.is_none());
}

#[test]
fn test_close_modal_is_idempotent() {
    let mut state = UiState::new();

    update(&mut state, Message::CloseModal);
    update(&mut state, Message::CloseModal);

    assert_eq!(state, UiState::new());
}

#[test]
fn test_backdrop_click_requests_close() {
    let mut state = UiState::new();
    update(&mut state, Message::OpenModal(test_card("Assignment 1")));

    let result = update(&mut state, Message::ModalClick(ModalTarget::Backdrop));

    assert_eq!(result.message, Some(Message::CloseModal));
    // Close happens on the follow-up, not in the click itself
    assert!(state.is_modal_open());
}

#[test]
fn test_close_button_requests_close() {
    let mut state = UiState::new();
    let result = update(&mut state, Message::ModalClick(ModalTarget::CloseButton));
    assert_eq!(result.message, Some(Message::CloseModal));
}

#[test]
fn test_panel_click_never_closes() {
    let mut state = UiState::new();
    let card = test_card("UI Development 3");
    let presentation = untouched_presentation();

    dispatch(&mut state, Message::OpenModal(card.clone()), &presentation);
    for _ in 0..3 {
        dispatch(&mut state, Message::ModalClick(ModalTarget::Panel), &presentation);
    }

    assert_eq!(state.modal, Some(card));
}

#[test]
fn test_dispatch_backdrop_click_closes_modal() {
    let mut state = UiState::new();
    let presentation = untouched_presentation();

    dispatch(&mut state, Message::OpenModal(test_card("Assignment 1")), &presentation);
    dispatch(&mut state, Message::ModalClick(ModalTarget::Backdrop), &presentation);

    assert!(!state.is_modal_open());
    assert!(state.modal.is_none());
}

#[test]
fn test_toggle_mobile_menu() {
    let mut state = UiState::new();

    update(&mut state, Message::ToggleMobileMenu);
    assert!(state.mobile_menu_open);

    update(&mut state, Message::ToggleMobileMenu);
    assert!(!state.mobile_menu_open);
}

#[test]
fn test_close_mobile_menu_when_already_closed() {
    let mut state = UiState::new();
    update(&mut state, Message::CloseMobileMenu);
    assert!(!state.mobile_menu_open);
}

#[test]
fn test_navigate_closes_mobile_menu() {
    let presentation = untouched_presentation();

    for section in Section::ALL {
        let mut state = UiState::new();
        dispatch(&mut state, Message::ToggleMobileMenu, &presentation);
        assert!(state.mobile_menu_open);

        dispatch(&mut state, Message::Navigate(section), &presentation);

        assert!(!state.mobile_menu_open, "menu still open after {section:?}");
    }
}

#[test]
fn test_navigate_leaves_modal_and_theme_alone() {
    let mut state = UiState::new();
    let presentation = untouched_presentation();
    dispatch(&mut state, Message::OpenModal(test_card("Milestone 2")), &presentation);

    dispatch(&mut state, Message::Navigate(Section::Progress), &presentation);

    assert!(state.is_modal_open());
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_toggle_theme_returns_apply_action() {
    let mut state = UiState::new();

    let result = update(&mut state, Message::ToggleTheme);

    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(result.action, Some(UpdateAction::ApplyTheme(Theme::Dark)));
    assert!(result.message.is_none());
}

#[test]
fn test_dispatch_applies_theme_to_presentation() {
    let mut state = UiState::new();
    let mut presentation = MockPresentationMode::new();
    presentation
        .expect_apply()
        .with(eq(Theme::Dark))
        .times(1)
        .return_const(());

    dispatch(&mut state, Message::ToggleTheme, &presentation);

    assert!(state.theme.is_dark());
}

#[test]
fn test_toggle_theme_twice_restores_original() {
    let mut state = UiState::new();
    let mut seq = Sequence::new();
    let mut presentation = MockPresentationMode::new();
    presentation
        .expect_apply()
        .with(eq(Theme::Dark))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    presentation
        .expect_apply()
        .with(eq(Theme::Light))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    dispatch(&mut state, Message::ToggleTheme, &presentation);
    dispatch(&mut state, Message::ToggleTheme, &presentation);

    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_theme_independent_of_modal_and_menu() {
    let mut state = UiState::new();
    let mut presentation = MockPresentationMode::new();
    presentation.expect_apply().times(1).return_const(());

    dispatch(&mut state, Message::OpenModal(test_card("Assignment 2")), &presentation);
    dispatch(&mut state, Message::ToggleMobileMenu, &presentation);
    dispatch(&mut state, Message::ToggleTheme, &presentation);

    assert!(state.is_modal_open());
    assert!(state.mobile_menu_open);
    assert!(state.theme.is_dark());
}
