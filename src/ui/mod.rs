// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{ActivePanel, LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH};

// Re-export components
pub use components::{
    CommandBar, CommandItem, Dialog, DialogKind, Panel, PanelStatus, StatusBar, ViewerOverlay,
    WarningScreen,
};
