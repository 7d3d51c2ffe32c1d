//! Focus management for modal dialogs in terminal UIs.
//!
//! Tracks the set of currently open dialogs and the element that held focus
//! before the first one opened; when the last dialog closes, focus (and its
//! pointer-vs-keyboard styling) is restored to that element. Built for
//! ratatui/crossterm event loops: the application constructs a
//! [`FocusContext`], registers focusables each frame, and drains dialog
//! close signals through a [`CloseDispatcher`].

pub mod config;
pub mod context;
pub mod dialog;
pub mod dispatch;
pub mod element;
pub mod host;
pub mod pointer;
pub mod registry;
pub mod scope;

pub use config::{FocusMode, RuntimeConfig};
pub use context::FocusContext;
pub use dialog::DialogFocusManager;
pub use dispatch::CloseDispatcher;
pub use element::{DialogId, FocusId};
pub use host::DialogHost;
pub use pointer::{FocusSource, PointerFocusClassifier};
pub use registry::{FocusRegistry, FocusableInfo};
pub use scope::FocusScopeTree;
