//! Game action definitions

/// All actions the runner reacts to
///
/// Key / button mappings:
/// - Space / A (South) = Jump
/// - Escape / Start = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Quit,
}
