// Test modules for Portfolio Chat
// Each module mirrors the source module it exercises

mod tui_tests;
