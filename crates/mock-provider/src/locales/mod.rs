//! Built-in locale data.

pub mod de;
pub mod en;
pub mod es;
pub mod fr;
