pub mod responsive;
pub mod theme;

/// Application page/view
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MenuPage {
    Create,
    Settings,
}
