//! Tests for the state module.

use super::{App, AppConfig, PopupState, StartupOptions};
use crate::columns::{ColumnKey, SortDirection, SortState};
use crate::commands::{AppCommand, InputContext};
use crate::domain::{AllocatorRecord, Network};
use crate::test_utils::AllocatorMother;

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App over `rows` with default configuration.
fn create_test_app(rows: Vec<AllocatorRecord>) -> App {
    App::new(rows, AppConfig::default(), StartupOptions::default())
}

fn ids(app: &App) -> Vec<&str> {
    app.rows().iter().map(|r| r.address_id.as_str()).collect()
}

fn select_column(app: &mut App, key: ColumnKey) {
    app.execute(AppCommand::First);
    while app.grid.selected_column() != key {
        app.execute(AppCommand::ColumnRight);
    }
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_startup_options_override_config() {
    let config = AppConfig {
        network: Network::Mainnet,
        ..AppConfig::default()
    };
    let options = StartupOptions {
        network: Some(Network::Calibration),
        sort: Some(SortState::new(ColumnKey::Name, SortDirection::Ascending)),
    };
    let app = App::new(AllocatorMother::trio(), config, options);

    assert_eq!(app.network, Network::Calibration);
    assert_eq!(app.chain(), Network::Calibration.chain_params());
    assert_eq!(ids(&app), ["f02", "f01", "f03"]);
}

#[test]
fn test_config_network_used_without_override() {
    let config = AppConfig {
        network: Network::Calibration,
        ..AppConfig::default()
    };
    let app = App::new(Vec::new(), config, StartupOptions::default());
    assert_eq!(app.network, Network::Calibration);
}

// ========================================================================
// Sorting Through The Message Channel
// ========================================================================

#[test]
fn test_header_activation_is_applied_by_process_messages() {
    let mut app = create_test_app(AllocatorMother::trio());

    app.execute(AppCommand::SortBy(ColumnKey::Allowance));
    // Queued, not yet applied.
    assert_eq!(app.grid.sort_state(), None);

    app.process_messages();
    assert_eq!(
        app.grid.sort_state(),
        Some(SortState::new(ColumnKey::Allowance, SortDirection::Ascending))
    );
    assert_eq!(ids(&app), ["f03", "f01", "f02"]);
}

#[test]
fn test_repeated_activation_cycles_direction() {
    let mut app = create_test_app(AllocatorMother::trio());
    let mut directions = Vec::new();

    for _ in 0..3 {
        app.execute(AppCommand::SortBy(ColumnKey::CreatedAtHeight));
        app.process_messages();
        directions.push(app.grid.sort_state().map(|s| s.direction));
    }

    assert_eq!(
        directions,
        [
            Some(SortDirection::Ascending),
            Some(SortDirection::Descending),
            Some(SortDirection::Ascending),
        ]
    );
}

#[test]
fn test_headers_follow_applied_sort() {
    let mut app = create_test_app(AllocatorMother::trio());
    select_column(&mut app, ColumnKey::Name);
    app.execute(AppCommand::SortSelectedColumn);
    app.process_messages();

    let sorted: Vec<_> = app
        .columns()
        .iter()
        .filter_map(|spec| {
            let header = spec.render_header();
            header.direction.map(|d| (header.key, d))
        })
        .collect();
    assert_eq!(sorted, [(ColumnKey::Name, SortDirection::Ascending)]);
}

#[test]
fn test_switching_column_starts_ascending() {
    let mut app = create_test_app(AllocatorMother::trio());
    app.execute(AppCommand::SortBy(ColumnKey::Name));
    app.execute(AppCommand::SortBy(ColumnKey::Name));
    app.process_messages();
    // Both requests were built from the same unsorted state.
    assert_eq!(
        app.grid.sort_state().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    app.execute(AppCommand::SortBy(ColumnKey::AddressId));
    app.process_messages();
    assert_eq!(
        app.grid.sort_state(),
        Some(SortState::new(ColumnKey::AddressId, SortDirection::Ascending))
    );
}

// ========================================================================
// Cell Affordances
// ========================================================================

#[test]
fn test_reveal_created_at_shows_block_height() {
    let mut app = create_test_app(vec![AllocatorMother::acme()]);
    select_column(&mut app, ColumnKey::CreatedAtHeight);

    app.execute(AppCommand::Reveal);

    assert_eq!(app.input_context(), InputContext::Disclosure);
    let disclosure = app.ui.popup_state.as_disclosure().unwrap();
    assert_eq!(disclosure.title, "Block height");
    assert_eq!(disclosure.entries[0].primary, "100");

    app.execute(AppCommand::Dismiss);
    assert_eq!(app.input_context(), InputContext::Main);
}

#[test]
fn test_reveal_allowance_history_in_input_order() {
    let mut app = create_test_app(vec![AllocatorMother::acme()]);
    select_column(&mut app, ColumnKey::InitialAllowance);

    app.execute(AppCommand::Reveal);

    let disclosure = app.ui.popup_state.as_disclosure().unwrap();
    let primaries: Vec<_> = disclosure.entries.iter().map(|e| e.primary.as_str()).collect();
    assert_eq!(primaries, ["1 GiB", "2 GiB"]);
}

#[test]
fn test_reveal_without_disclosure_shows_toast() {
    let mut app = create_test_app(vec![AllocatorMother::without_history("f05")]);
    select_column(&mut app, ColumnKey::InitialAllowance);

    app.execute(AppCommand::Reveal);

    assert_eq!(app.ui.popup_state, PopupState::None);
    assert_eq!(
        app.ui.toast_message(),
        Some("No details for Total DataCap received")
    );
}

#[tokio::test]
async fn test_copy_address_is_fire_and_forget() {
    let mut app = create_test_app(vec![AllocatorMother::acme()]);
    app.execute(AppCommand::CopyAddress);
    assert_eq!(app.ui.toast_message(), Some("[+] Address sent to clipboard"));
    assert_eq!(app.ui.popup_state, PopupState::None);
}

#[test]
fn test_affordances_on_empty_grid() {
    let mut app = create_test_app(Vec::new());

    app.execute(AppCommand::CopyAddress);
    assert_eq!(app.ui.toast_message(), Some("[x] Nothing to copy"));

    app.execute(AppCommand::OpenLink);
    assert_eq!(app.ui.toast_message(), Some("[x] No allocator selected"));

    app.execute(AppCommand::Reveal);
    assert_eq!(app.ui.popup_state, PopupState::None);
}

// ========================================================================
// Navigation And Control
// ========================================================================

#[test]
fn test_page_navigation_uses_page_size() {
    let rows = (1..=10)
        .map(|i| AllocatorMother::without_history(&format!("f0{i}")))
        .collect();
    let mut app = create_test_app(rows);
    app.page_size = 4;

    app.execute(AppCommand::PageDown);
    assert_eq!(app.grid.selected_index(), Some(4));
    app.execute(AppCommand::PageDown);
    app.execute(AppCommand::PageDown);
    assert_eq!(app.grid.selected_index(), Some(9));
    app.execute(AppCommand::PageUp);
    assert_eq!(app.grid.selected_index(), Some(5));
}

#[test]
fn test_input_context_follows_popup() {
    let mut app = create_test_app(Vec::new());
    assert_eq!(app.input_context(), InputContext::Main);

    app.execute(AppCommand::ShowHelp);
    assert_eq!(app.input_context(), InputContext::Help);

    app.ui.show_message("oops");
    assert_eq!(app.input_context(), InputContext::MessagePopup);
}

#[test]
fn test_quit_sets_exit() {
    let mut app = create_test_app(Vec::new());
    assert!(!app.exit);
    app.execute(AppCommand::Quit);
    assert!(app.exit);
}

#[test]
fn test_navigation_scrolls_open_disclosure_instead_of_grid() {
    let mut app = create_test_app(vec![
        AllocatorMother::long_history(30),
        AllocatorMother::without_history("f02"),
    ]);
    select_column(&mut app, ColumnKey::InitialAllowance);
    app.execute(AppCommand::Reveal);

    app.execute(AppCommand::MoveDown);
    app.execute(AppCommand::Last);
    assert_eq!(app.grid.selected_index(), Some(0));
    let PopupState::Disclosure(view) = &app.ui.popup_state else {
        panic!("disclosure should stay open");
    };
    assert_eq!(view.last_visible(), 30);

    app.execute(AppCommand::Dismiss);
    app.execute(AppCommand::MoveDown);
    assert_eq!(app.grid.selected_index(), Some(1));
}

// ========================================================================
// Network Toggle
// ========================================================================

#[test]
fn test_toggle_network_reanchors_persists_and_notifies() {
    let path = std::env::temp_dir().join(format!(
        "lazycap-{}-toggle-network.json",
        std::process::id()
    ));
    let mut app = App::new(
        vec![AllocatorMother::acme()],
        AppConfig::with_file(&path),
        StartupOptions::default(),
    );
    assert_eq!(app.network, Network::Mainnet);

    app.execute(AppCommand::ToggleNetwork);

    assert_eq!(app.network, Network::Calibration);
    assert_eq!(app.chain(), Network::Calibration.chain_params());
    assert_eq!(app.ui.toast_message(), Some("Dates anchored to Calibration"));
    let saved = AppConfig::load_from(&path).unwrap();
    assert_eq!(saved.network, Network::Calibration);

    app.execute(AppCommand::ToggleNetwork);
    assert_eq!(app.network, Network::Mainnet);
    assert_eq!(AppConfig::load_from(&path).unwrap().network, Network::Mainnet);

    std::fs::remove_file(&path).unwrap();
}
