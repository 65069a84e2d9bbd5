//! # Route Modules
//!
//! | Method | Path          | Handler                     |
//! |--------|---------------|-----------------------------|
//! | `POST` | `/api/submit` | [`submissions::submit`]     |

pub mod submissions;
