//! GPIO Line Driver
//!
//! Single-pin digital I/O on the KL25Z GPIO and PORT modules. Writes go
//! through the set/clear/toggle registers, so no read-modify-write of the
//! output latch is ever needed.
//!
//! Only pins routed to the FRDM-KL25Z headers can be claimed.

mod driver;
mod hal;
mod port;
pub mod registers;

pub use driver::GpioLine;
pub use port::Port;
