//! Platform-agnostic header model: languages, navigation targets, panel state
//! and persistence. Nothing here renders.

pub mod language;
pub mod menu;
pub mod nav;
pub mod storage;
