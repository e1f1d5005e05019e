// TUI Tests Module - Testing the public tui module
// - app_tests: App struct and business logic
// - keys_tests: key routing
// - screens_tests: ContactFormScreen
// - ui_tests: UI helpers and full-frame rendering

mod app_tests;
mod screens_tests;
