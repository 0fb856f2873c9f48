//! Command code tables.
//!
//! These constants define the one-byte command codes understood by the
//! HomeLink firmware. There are two independent code spaces, selected at
//! build/configuration time and never mixed on one link:
//!
//! - [`numeric`]: compact codes for low-bandwidth links; byte values are
//!   arbitrary small integers and are not human-typeable.
//! - [`ascii`]: every code equals a printable character so the protocol can
//!   be driven from a terminal keyboard; trades byte-space for
//!   debuggability.
//!
//! A code is only meaningful relative to the node it is addressed to. Codes
//! are unique within one (node, code space) pair, but *not* across nodes --
//! see [`crate::cross_namespace_collisions`].

/// Numeric-compact command codes (host link build).
pub mod numeric {
    // ========================================================================
    // Controller commands
    // ========================================================================

    /// Request firmware version.
    pub const CTRL_REQUEST_FW_VER: u8 = 75;
    /// Request the controller's temperature reading.
    pub const CTRL_REQUEST_TEMP: u8 = 76;
    /// Enable the furnace control loop.
    pub const CTRL_ENABLE_FURNACE: u8 = 77;
    /// Disable the furnace control loop.
    pub const CTRL_DISABLE_FURNACE: u8 = 78;
    /// Raise the temperature set point one step.
    pub const CTRL_INCREASE_TEMP_SET_POINT: u8 = 79;
    /// Lower the temperature set point one step.
    pub const CTRL_DECREASE_TEMP_SET_POINT: u8 = 80;
    /// Report overall system status.
    pub const CTRL_STATUS_REPORT: u8 = 81;
    /// Enable the engine block heater outlet.
    pub const CTRL_ENABLE_BLOCK_HEATER: u8 = 82;
    /// Disable the engine block heater outlet.
    pub const CTRL_DISABLE_BLOCK_HEATER: u8 = 83;
    /// Set the bedroom temperature set point (takes a float payload).
    pub const CTRL_SET_BEDROOM_SET_POINT: u8 = 84;
    /// List the available commands.
    pub const CTRL_LIST_COMMANDS: u8 = 63;
    /// Log off the current session.
    pub const CTRL_LOG_OFF: u8 = 120;

    // ========================================================================
    // Basement commands (from the controller)
    // ========================================================================

    /// Request firmware version.
    pub const BSMT_REQUEST_FW_VER: u8 = 32;
    /// Request the furnace relay status.
    pub const BSMT_REQUEST_FURNACE_STATUS: u8 = 33;
    /// Close the furnace relay.
    pub const BSMT_TURN_FURNACE_ON: u8 = 34;
    /// Open the furnace relay.
    pub const BSMT_TURN_FURNACE_OFF: u8 = 35;
    /// Run the circulation fan.
    pub const BSMT_TURN_FAN_ON: u8 = 36;
    /// Stop both furnace and fan.
    pub const BSMT_TURN_FURNACE_AND_FAN_OFF: u8 = 37;
    /// Request the basement temperature reading.
    pub const BSMT_REQUEST_TEMP: u8 = 38;
    /// Request the basement humidity reading.
    pub const BSMT_REQUEST_HUMIDITY: u8 = 39;
    /// Request the floor moisture sensor status.
    pub const BSMT_REQUEST_MOISTURE_STATUS: u8 = 40;
    /// Request the node CPU temperature.
    pub const BSMT_REQUEST_CPU_TEMP: u8 = 43;

    // ========================================================================
    // Garage commands (from the controller)
    // ========================================================================

    /// Request firmware version.
    pub const GRGE_REQUEST_FW_VER: u8 = 0;
    /// Request the door open/closed status.
    pub const GRGE_REQUEST_DOOR_STATUS: u8 = 1;
    /// Request the zone 1 temperature reading.
    pub const GRGE_REQUEST_TEMP_ZONE1: u8 = 2;
    /// Pulse the door opener.
    pub const GRGE_REQUEST_ACTIVATE_DOOR: u8 = 3;
    /// Request the auto-close armed status.
    pub const GRGE_REQUEST_AUTO_CLOSE_STATUS: u8 = 4;
    /// Disarm door auto-close.
    pub const GRGE_REQUEST_DISABLE_AUTO_CLOSE: u8 = 5;
    /// Arm door auto-close.
    pub const GRGE_REQUEST_ENABLE_AUTO_CLOSE: u8 = 6;
    /// Energize the 120 V outlet 1.
    pub const GRGE_REQUEST_ACTIVATE_120V1: u8 = 7;
    /// De-energize the 120 V outlet 1.
    pub const GRGE_REQUEST_DEACTIVATE_120V1: u8 = 8;
    /// Request the node CPU temperature.
    pub const GRGE_REQUEST_CPU_TEMP: u8 = 9;
    /// Request the zone 2 temperature reading.
    pub const GRGE_REQUEST_TEMP_ZONE2: u8 = 10;
    /// Clear the latched error flag.
    pub const GRGE_REQUEST_CLEAR_ERROR_FLAG: u8 = 11;
    /// Request the power supply voltage reading.
    pub const GRGE_REQUEST_POWER_SUPPLY_V: u8 = 12;

    // ========================================================================
    // Bedroom commands (from the controller)
    // ========================================================================
    // The original numeric table predates the bedroom node; codes 50-56 were
    // assigned from an unused range so both code spaces cover the same
    // command set.

    /// Request firmware version.
    pub const BDRM_REQUEST_FW_VER: u8 = 50;
    /// Request the bedroom temperature reading.
    pub const BDRM_REQUEST_TEMP: u8 = 51;
    /// Raise the bedroom set point one step.
    pub const BDRM_INCREASE_SET_POINT: u8 = 52;
    /// Lower the bedroom set point one step.
    pub const BDRM_DECREASE_SET_POINT: u8 = 53;
    /// Start holding the bedroom set point.
    pub const BDRM_MAINTAIN_SET_POINT: u8 = 54;
    /// Stop holding the bedroom set point.
    pub const BDRM_DONT_MAINTAIN_SET_POINT: u8 = 55;
    /// Request the current bedroom set point.
    pub const BDRM_REQUEST_SET_POINT: u8 = 56;
}

/// ASCII-debug command codes (keyboard build).
///
/// Every code is a printable character so a human can drive a node from a
/// serial terminal. Alternate codes use 0-9 and a-z style characters for
/// debugging with a keyboard.
pub mod ascii {
    // ========================================================================
    // Controller commands
    // ========================================================================

    /// Request firmware version.
    pub const CTRL_REQUEST_FW_VER: u8 = b'K';
    /// Request the controller's temperature reading.
    pub const CTRL_REQUEST_TEMP: u8 = b'L';
    /// Enable the furnace control loop.
    pub const CTRL_ENABLE_FURNACE: u8 = b'M';
    /// Disable the furnace control loop.
    pub const CTRL_DISABLE_FURNACE: u8 = b'N';
    /// Raise the temperature set point one step.
    pub const CTRL_INCREASE_TEMP_SET_POINT: u8 = b'O';
    /// Lower the temperature set point one step.
    pub const CTRL_DECREASE_TEMP_SET_POINT: u8 = b'P';
    /// Report overall system status.
    pub const CTRL_STATUS_REPORT: u8 = b'S';
    /// Enable the engine block heater outlet.
    pub const CTRL_ENABLE_BLOCK_HEATER: u8 = b'Q';
    /// Disable the engine block heater outlet.
    pub const CTRL_DISABLE_BLOCK_HEATER: u8 = b'R';
    /// Set the bedroom temperature set point (takes a float payload).
    ///
    /// Collides with [`BSMT_REQUEST_FURNACE_STATUS`] -- see
    /// [`crate::cross_namespace_collisions`].
    pub const CTRL_SET_BEDROOM_SET_POINT: u8 = b'B';
    /// List the available commands.
    pub const CTRL_LIST_COMMANDS: u8 = b'?';
    /// Log off the current session.
    pub const CTRL_LOG_OFF: u8 = b'x';

    // ========================================================================
    // Basement commands (from the controller)
    // ========================================================================

    /// Request firmware version.
    pub const BSMT_REQUEST_FW_VER: u8 = b'A';
    /// Request the furnace relay status.
    pub const BSMT_REQUEST_FURNACE_STATUS: u8 = b'B';
    /// Close the furnace relay.
    pub const BSMT_TURN_FURNACE_ON: u8 = b'C';
    /// Open the furnace relay.
    pub const BSMT_TURN_FURNACE_OFF: u8 = b'D';
    /// Run the circulation fan.
    pub const BSMT_TURN_FAN_ON: u8 = b'E';
    /// Stop both furnace and fan.
    pub const BSMT_TURN_FURNACE_AND_FAN_OFF: u8 = b'F';
    /// Request the basement temperature reading.
    pub const BSMT_REQUEST_TEMP: u8 = b'G';
    /// Request the basement humidity reading.
    pub const BSMT_REQUEST_HUMIDITY: u8 = b'H';
    /// Request the floor moisture sensor status.
    pub const BSMT_REQUEST_MOISTURE_STATUS: u8 = b'I';
    /// Request the node CPU temperature.
    pub const BSMT_REQUEST_CPU_TEMP: u8 = b'J';

    // ========================================================================
    // Garage commands (from the controller)
    // ========================================================================

    /// Request firmware version.
    pub const GRGE_REQUEST_FW_VER: u8 = b'0';
    /// Request the door open/closed status.
    pub const GRGE_REQUEST_DOOR_STATUS: u8 = b'1';
    /// Request the zone 1 temperature reading.
    pub const GRGE_REQUEST_TEMP_ZONE1: u8 = b'2';
    /// Pulse the door opener.
    pub const GRGE_REQUEST_ACTIVATE_DOOR: u8 = b'3';
    /// Request the auto-close armed status.
    pub const GRGE_REQUEST_AUTO_CLOSE_STATUS: u8 = b'4';
    /// Disarm door auto-close.
    pub const GRGE_REQUEST_DISABLE_AUTO_CLOSE: u8 = b'5';
    /// Arm door auto-close.
    pub const GRGE_REQUEST_ENABLE_AUTO_CLOSE: u8 = b'6';
    /// Energize the 120 V outlet 1.
    pub const GRGE_REQUEST_ACTIVATE_120V1: u8 = b'7';
    /// De-energize the 120 V outlet 1.
    pub const GRGE_REQUEST_DEACTIVATE_120V1: u8 = b'8';
    /// Request the node CPU temperature.
    pub const GRGE_REQUEST_CPU_TEMP: u8 = b'9';
    /// Request the zone 2 temperature reading.
    pub const GRGE_REQUEST_TEMP_ZONE2: u8 = b'a';
    /// Clear the latched error flag.
    pub const GRGE_REQUEST_CLEAR_ERROR_FLAG: u8 = b'b';
    /// Request the power supply voltage reading.
    pub const GRGE_REQUEST_POWER_SUPPLY_V: u8 = b'c';

    // ========================================================================
    // Bedroom commands (from the controller)
    // ========================================================================

    /// Request firmware version.
    pub const BDRM_REQUEST_FW_VER: u8 = b'i';
    /// Request the bedroom temperature reading.
    pub const BDRM_REQUEST_TEMP: u8 = b'j';
    /// Raise the bedroom set point one step.
    pub const BDRM_INCREASE_SET_POINT: u8 = b'k';
    /// Lower the bedroom set point one step.
    pub const BDRM_DECREASE_SET_POINT: u8 = b'l';
    /// Start holding the bedroom set point.
    pub const BDRM_MAINTAIN_SET_POINT: u8 = b'm';
    /// Stop holding the bedroom set point.
    pub const BDRM_DONT_MAINTAIN_SET_POINT: u8 = b'n';
    /// Request the current bedroom set point.
    pub const BDRM_REQUEST_SET_POINT: u8 = b'o';
}
