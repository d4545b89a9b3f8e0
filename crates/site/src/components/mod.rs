pub mod canvas;
pub mod modal;
pub mod nav;
pub mod preview;
pub mod range;
