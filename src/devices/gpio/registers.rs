//! GPIO and PORT register definitions

// =============================================================================
// GPIO (FGPIO not used)
// =============================================================================

/// GPIOA base address; GPIOB..GPIOE follow at 0x40 strides
pub const GPIOA_BASE: u32 = 0x400F_F000;

/// Distance between consecutive GPIO ports
pub const GPIO_STRIDE: u32 = 0x40;

/// Port Data Output Register
pub const PDOR: u32 = 0x00;

/// Port Set Output Register (write-only)
pub const PSOR: u32 = 0x04;

/// Port Clear Output Register (write-only)
pub const PCOR: u32 = 0x08;

/// Port Toggle Output Register (write-only)
pub const PTOR: u32 = 0x0C;

/// Port Data Input Register
pub const PDIR: u32 = 0x10;

/// Port Data Direction Register
pub const PDDR: u32 = 0x14;

// =============================================================================
// PORT pin control
// =============================================================================

/// PORTA PCR0 address; PORTB..PORTE follow at 0x1000 strides
pub const PORTA_PCR0: u32 = 0x4004_9000;

/// Distance between consecutive PORT modules
pub const PORT_STRIDE: u32 = 0x1000;

/// Distance between consecutive PCRn registers
pub const PCR_STRIDE: u32 = 4;

/// Pin mux control `[10:8]`
pub const PCR_MUX_SHIFT: u32 = 8;

/// MUX alternative 1: GPIO
pub const MUX_GPIO: u32 = 1;

/// Pull enable
pub const PCR_PE: u32 = 1 << 1;

/// Pull select (1 = pull-up)
pub const PCR_PS: u32 = 1 << 0;

// =============================================================================
// Board pin availability
// =============================================================================

/// Pins routed to the FRDM-KL25Z headers, one mask per port (A..E)
pub const HEADER_PINS: [u32; 5] = [
    // PTA1, 2, 4, 5, 12, 13, 17
    (1 << 1) | (1 << 2) | (1 << 4) | (1 << 5) | (1 << 12) | (1 << 13) | (1 << 17),
    // PTB0-3, 8-11, 18 (red LED), 19 (green LED)
    0x0000_000F | 0x0000_0F00 | (1 << 18) | (1 << 19),
    // PTC0-17
    0x0003_FFFF,
    // PTD0-7 (PTD1 blue LED)
    0x0000_00FF,
    // PTE0, 1, 3, 4, 5, 20-23, 29
    (1 << 0) | (1 << 1) | (1 << 3) | (1 << 4) | (1 << 5) | 0x00F0_0000 | (1 << 29),
];
