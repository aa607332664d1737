/// State management module
///
/// This module handles all application state, including:
/// - The accumulated gallery records and pagination cursor (gallery.rs)
/// - The Idle/Fetching state machine guarding against duplicate requests

pub mod gallery;
