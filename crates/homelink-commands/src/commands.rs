//! Symbolic commands for each HomeLink node.
//!
//! Each node understands a fixed set of commands, and each command maps to
//! exactly one byte under each [`EncodingMode`]. The mapping here is the
//! single source of truth for both ends of the link: the controller encodes
//! with [`code`](ControllerCommand::code) and the node firmware decodes with
//! [`from_code`](ControllerCommand::from_code).

use crate::codes::{ascii, numeric};

/// Which of the two command code tables is active for a build.
///
/// The two encodings are not interoperable; a link must use the same mode on
/// both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Compact codes for low-bandwidth links; not human-typeable.
    Numeric,
    /// Printable-character codes for driving a node from a terminal.
    AsciiDebug,
}

/// Commands understood by the controller node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerCommand {
    /// Request firmware version.
    RequestFwVer,
    /// Request the controller's temperature reading.
    RequestTemp,
    /// Enable the furnace control loop.
    EnableFurnace,
    /// Disable the furnace control loop.
    DisableFurnace,
    /// Raise the temperature set point one step.
    IncreaseTempSetPoint,
    /// Lower the temperature set point one step.
    DecreaseTempSetPoint,
    /// Report overall system status.
    StatusReport,
    /// Enable the engine block heater outlet.
    EnableBlockHeater,
    /// Disable the engine block heater outlet.
    DisableBlockHeater,
    /// Set the bedroom temperature set point. Followed by a float payload.
    SetBedroomSetPoint,
    /// List the available commands.
    ListCommands,
    /// Log off the current session.
    LogOff,
}

impl ControllerCommand {
    /// Every controller command, in table order.
    pub const ALL: &'static [ControllerCommand] = &[
        ControllerCommand::RequestFwVer,
        ControllerCommand::RequestTemp,
        ControllerCommand::EnableFurnace,
        ControllerCommand::DisableFurnace,
        ControllerCommand::IncreaseTempSetPoint,
        ControllerCommand::DecreaseTempSetPoint,
        ControllerCommand::StatusReport,
        ControllerCommand::EnableBlockHeater,
        ControllerCommand::DisableBlockHeater,
        ControllerCommand::SetBedroomSetPoint,
        ControllerCommand::ListCommands,
        ControllerCommand::LogOff,
    ];

    /// Get the one-byte code for this command under `mode`.
    pub fn code(&self, mode: EncodingMode) -> u8 {
        match mode {
            EncodingMode::Numeric => match self {
                ControllerCommand::RequestFwVer => numeric::CTRL_REQUEST_FW_VER,
                ControllerCommand::RequestTemp => numeric::CTRL_REQUEST_TEMP,
                ControllerCommand::EnableFurnace => numeric::CTRL_ENABLE_FURNACE,
                ControllerCommand::DisableFurnace => numeric::CTRL_DISABLE_FURNACE,
                ControllerCommand::IncreaseTempSetPoint => numeric::CTRL_INCREASE_TEMP_SET_POINT,
                ControllerCommand::DecreaseTempSetPoint => numeric::CTRL_DECREASE_TEMP_SET_POINT,
                ControllerCommand::StatusReport => numeric::CTRL_STATUS_REPORT,
                ControllerCommand::EnableBlockHeater => numeric::CTRL_ENABLE_BLOCK_HEATER,
                ControllerCommand::DisableBlockHeater => numeric::CTRL_DISABLE_BLOCK_HEATER,
                ControllerCommand::SetBedroomSetPoint => numeric::CTRL_SET_BEDROOM_SET_POINT,
                ControllerCommand::ListCommands => numeric::CTRL_LIST_COMMANDS,
                ControllerCommand::LogOff => numeric::CTRL_LOG_OFF,
            },
            EncodingMode::AsciiDebug => match self {
                ControllerCommand::RequestFwVer => ascii::CTRL_REQUEST_FW_VER,
                ControllerCommand::RequestTemp => ascii::CTRL_REQUEST_TEMP,
                ControllerCommand::EnableFurnace => ascii::CTRL_ENABLE_FURNACE,
                ControllerCommand::DisableFurnace => ascii::CTRL_DISABLE_FURNACE,
                ControllerCommand::IncreaseTempSetPoint => ascii::CTRL_INCREASE_TEMP_SET_POINT,
                ControllerCommand::DecreaseTempSetPoint => ascii::CTRL_DECREASE_TEMP_SET_POINT,
                ControllerCommand::StatusReport => ascii::CTRL_STATUS_REPORT,
                ControllerCommand::EnableBlockHeater => ascii::CTRL_ENABLE_BLOCK_HEATER,
                ControllerCommand::DisableBlockHeater => ascii::CTRL_DISABLE_BLOCK_HEATER,
                ControllerCommand::SetBedroomSetPoint => ascii::CTRL_SET_BEDROOM_SET_POINT,
                ControllerCommand::ListCommands => ascii::CTRL_LIST_COMMANDS,
                ControllerCommand::LogOff => ascii::CTRL_LOG_OFF,
            },
        }
    }

    /// Look up a received command byte under `mode`.
    ///
    /// Returns `None` for bytes outside the controller's table.
    pub fn from_code(mode: EncodingMode, byte: u8) -> Option<ControllerCommand> {
        match mode {
            EncodingMode::Numeric => match byte {
                numeric::CTRL_REQUEST_FW_VER => Some(ControllerCommand::RequestFwVer),
                numeric::CTRL_REQUEST_TEMP => Some(ControllerCommand::RequestTemp),
                numeric::CTRL_ENABLE_FURNACE => Some(ControllerCommand::EnableFurnace),
                numeric::CTRL_DISABLE_FURNACE => Some(ControllerCommand::DisableFurnace),
                numeric::CTRL_INCREASE_TEMP_SET_POINT => Some(ControllerCommand::IncreaseTempSetPoint),
                numeric::CTRL_DECREASE_TEMP_SET_POINT => Some(ControllerCommand::DecreaseTempSetPoint),
                numeric::CTRL_STATUS_REPORT => Some(ControllerCommand::StatusReport),
                numeric::CTRL_ENABLE_BLOCK_HEATER => Some(ControllerCommand::EnableBlockHeater),
                numeric::CTRL_DISABLE_BLOCK_HEATER => Some(ControllerCommand::DisableBlockHeater),
                numeric::CTRL_SET_BEDROOM_SET_POINT => Some(ControllerCommand::SetBedroomSetPoint),
                numeric::CTRL_LIST_COMMANDS => Some(ControllerCommand::ListCommands),
                numeric::CTRL_LOG_OFF => Some(ControllerCommand::LogOff),
                _ => None,
            },
            EncodingMode::AsciiDebug => match byte {
                ascii::CTRL_REQUEST_FW_VER => Some(ControllerCommand::RequestFwVer),
                ascii::CTRL_REQUEST_TEMP => Some(ControllerCommand::RequestTemp),
                ascii::CTRL_ENABLE_FURNACE => Some(ControllerCommand::EnableFurnace),
                ascii::CTRL_DISABLE_FURNACE => Some(ControllerCommand::DisableFurnace),
                ascii::CTRL_INCREASE_TEMP_SET_POINT => Some(ControllerCommand::IncreaseTempSetPoint),
                ascii::CTRL_DECREASE_TEMP_SET_POINT => Some(ControllerCommand::DecreaseTempSetPoint),
                ascii::CTRL_STATUS_REPORT => Some(ControllerCommand::StatusReport),
                ascii::CTRL_ENABLE_BLOCK_HEATER => Some(ControllerCommand::EnableBlockHeater),
                ascii::CTRL_DISABLE_BLOCK_HEATER => Some(ControllerCommand::DisableBlockHeater),
                ascii::CTRL_SET_BEDROOM_SET_POINT => Some(ControllerCommand::SetBedroomSetPoint),
                ascii::CTRL_LIST_COMMANDS => Some(ControllerCommand::ListCommands),
                ascii::CTRL_LOG_OFF => Some(ControllerCommand::LogOff),
                _ => None,
            },
        }
    }

    /// The firmware's symbolic name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerCommand::RequestFwVer => "requestFWVer",
            ControllerCommand::RequestTemp => "requestTemp",
            ControllerCommand::EnableFurnace => "enableFurnace",
            ControllerCommand::DisableFurnace => "disableFurnace",
            ControllerCommand::IncreaseTempSetPoint => "increaseTempSetPoint",
            ControllerCommand::DecreaseTempSetPoint => "decreaseTempSetPoint",
            ControllerCommand::StatusReport => "statusReport",
            ControllerCommand::EnableBlockHeater => "enableBlockHeater",
            ControllerCommand::DisableBlockHeater => "disableBlockHeater",
            ControllerCommand::SetBedroomSetPoint => "setBedroomSetPoint",
            ControllerCommand::ListCommands => "listCommands",
            ControllerCommand::LogOff => "logOff",
        }
    }
}

/// Commands the controller can send to the basement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasementCommand {
    /// Request firmware version.
    RequestFwVer,
    /// Request the furnace relay status.
    RequestFurnaceStatus,
    /// Close the furnace relay.
    TurnFurnaceOn,
    /// Open the furnace relay.
    TurnFurnaceOff,
    /// Run the circulation fan.
    TurnFanOn,
    /// Stop both furnace and fan.
    TurnFurnaceAndFanOff,
    /// Request the basement temperature reading.
    RequestTemp,
    /// Request the basement humidity reading.
    RequestHumidity,
    /// Request the floor moisture sensor status.
    RequestMoistureStatus,
    /// Request the node CPU temperature.
    RequestCpuTemp,
}

impl BasementCommand {
    /// Every basement command, in table order.
    pub const ALL: &'static [BasementCommand] = &[
        BasementCommand::RequestFwVer,
        BasementCommand::RequestFurnaceStatus,
        BasementCommand::TurnFurnaceOn,
        BasementCommand::TurnFurnaceOff,
        BasementCommand::TurnFanOn,
        BasementCommand::TurnFurnaceAndFanOff,
        BasementCommand::RequestTemp,
        BasementCommand::RequestHumidity,
        BasementCommand::RequestMoistureStatus,
        BasementCommand::RequestCpuTemp,
    ];

    /// Get the one-byte code for this command under `mode`.
    pub fn code(&self, mode: EncodingMode) -> u8 {
        match mode {
            EncodingMode::Numeric => match self {
                BasementCommand::RequestFwVer => numeric::BSMT_REQUEST_FW_VER,
                BasementCommand::RequestFurnaceStatus => numeric::BSMT_REQUEST_FURNACE_STATUS,
                BasementCommand::TurnFurnaceOn => numeric::BSMT_TURN_FURNACE_ON,
                BasementCommand::TurnFurnaceOff => numeric::BSMT_TURN_FURNACE_OFF,
                BasementCommand::TurnFanOn => numeric::BSMT_TURN_FAN_ON,
                BasementCommand::TurnFurnaceAndFanOff => numeric::BSMT_TURN_FURNACE_AND_FAN_OFF,
                BasementCommand::RequestTemp => numeric::BSMT_REQUEST_TEMP,
                BasementCommand::RequestHumidity => numeric::BSMT_REQUEST_HUMIDITY,
                BasementCommand::RequestMoistureStatus => numeric::BSMT_REQUEST_MOISTURE_STATUS,
                BasementCommand::RequestCpuTemp => numeric::BSMT_REQUEST_CPU_TEMP,
            },
            EncodingMode::AsciiDebug => match self {
                BasementCommand::RequestFwVer => ascii::BSMT_REQUEST_FW_VER,
                BasementCommand::RequestFurnaceStatus => ascii::BSMT_REQUEST_FURNACE_STATUS,
                BasementCommand::TurnFurnaceOn => ascii::BSMT_TURN_FURNACE_ON,
                BasementCommand::TurnFurnaceOff => ascii::BSMT_TURN_FURNACE_OFF,
                BasementCommand::TurnFanOn => ascii::BSMT_TURN_FAN_ON,
                BasementCommand::TurnFurnaceAndFanOff => ascii::BSMT_TURN_FURNACE_AND_FAN_OFF,
                BasementCommand::RequestTemp => ascii::BSMT_REQUEST_TEMP,
                BasementCommand::RequestHumidity => ascii::BSMT_REQUEST_HUMIDITY,
                BasementCommand::RequestMoistureStatus => ascii::BSMT_REQUEST_MOISTURE_STATUS,
                BasementCommand::RequestCpuTemp => ascii::BSMT_REQUEST_CPU_TEMP,
            },
        }
    }

    /// Look up a received command byte under `mode`.
    ///
    /// Returns `None` for bytes outside the basement's table.
    pub fn from_code(mode: EncodingMode, byte: u8) -> Option<BasementCommand> {
        match mode {
            EncodingMode::Numeric => match byte {
                numeric::BSMT_REQUEST_FW_VER => Some(BasementCommand::RequestFwVer),
                numeric::BSMT_REQUEST_FURNACE_STATUS => Some(BasementCommand::RequestFurnaceStatus),
                numeric::BSMT_TURN_FURNACE_ON => Some(BasementCommand::TurnFurnaceOn),
                numeric::BSMT_TURN_FURNACE_OFF => Some(BasementCommand::TurnFurnaceOff),
                numeric::BSMT_TURN_FAN_ON => Some(BasementCommand::TurnFanOn),
                numeric::BSMT_TURN_FURNACE_AND_FAN_OFF => Some(BasementCommand::TurnFurnaceAndFanOff),
                numeric::BSMT_REQUEST_TEMP => Some(BasementCommand::RequestTemp),
                numeric::BSMT_REQUEST_HUMIDITY => Some(BasementCommand::RequestHumidity),
                numeric::BSMT_REQUEST_MOISTURE_STATUS => Some(BasementCommand::RequestMoistureStatus),
                numeric::BSMT_REQUEST_CPU_TEMP => Some(BasementCommand::RequestCpuTemp),
                _ => None,
            },
            EncodingMode::AsciiDebug => match byte {
                ascii::BSMT_REQUEST_FW_VER => Some(BasementCommand::RequestFwVer),
                ascii::BSMT_REQUEST_FURNACE_STATUS => Some(BasementCommand::RequestFurnaceStatus),
                ascii::BSMT_TURN_FURNACE_ON => Some(BasementCommand::TurnFurnaceOn),
                ascii::BSMT_TURN_FURNACE_OFF => Some(BasementCommand::TurnFurnaceOff),
                ascii::BSMT_TURN_FAN_ON => Some(BasementCommand::TurnFanOn),
                ascii::BSMT_TURN_FURNACE_AND_FAN_OFF => Some(BasementCommand::TurnFurnaceAndFanOff),
                ascii::BSMT_REQUEST_TEMP => Some(BasementCommand::RequestTemp),
                ascii::BSMT_REQUEST_HUMIDITY => Some(BasementCommand::RequestHumidity),
                ascii::BSMT_REQUEST_MOISTURE_STATUS => Some(BasementCommand::RequestMoistureStatus),
                ascii::BSMT_REQUEST_CPU_TEMP => Some(BasementCommand::RequestCpuTemp),
                _ => None,
            },
        }
    }

    /// The firmware's symbolic name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            BasementCommand::RequestFwVer => "requestFWVer",
            BasementCommand::RequestFurnaceStatus => "requestFurnaceStatus",
            BasementCommand::TurnFurnaceOn => "turnFurnaceOn",
            BasementCommand::TurnFurnaceOff => "turnFurnaceOff",
            BasementCommand::TurnFanOn => "turnFanOn",
            BasementCommand::TurnFurnaceAndFanOff => "turnFurnaceAndFanOff",
            BasementCommand::RequestTemp => "requestTemp",
            BasementCommand::RequestHumidity => "requestHumidity",
            BasementCommand::RequestMoistureStatus => "requestMoistureStatus",
            BasementCommand::RequestCpuTemp => "requestCPUTemp",
        }
    }
}

/// Commands the controller can send to the garage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GarageCommand {
    /// Request firmware version.
    RequestFwVer,
    /// Request the door open/closed status.
    RequestDoorStatus,
    /// Request the zone 1 temperature reading.
    RequestTempZone1,
    /// Pulse the door opener.
    RequestActivateDoor,
    /// Request the auto-close armed status.
    RequestAutoCloseStatus,
    /// Disarm door auto-close.
    RequestDisableAutoClose,
    /// Arm door auto-close.
    RequestEnableAutoClose,
    /// Energize the 120 V outlet 1.
    RequestActivate120V1,
    /// De-energize the 120 V outlet 1.
    RequestDeactivate120V1,
    /// Request the node CPU temperature.
    RequestCpuTemp,
    /// Request the zone 2 temperature reading.
    RequestTempZone2,
    /// Clear the latched error flag.
    RequestClearErrorFlag,
    /// Request the power supply voltage reading.
    RequestPowerSupplyV,
}

impl GarageCommand {
    /// Every garage command, in table order.
    pub const ALL: &'static [GarageCommand] = &[
        GarageCommand::RequestFwVer,
        GarageCommand::RequestDoorStatus,
        GarageCommand::RequestTempZone1,
        GarageCommand::RequestActivateDoor,
        GarageCommand::RequestAutoCloseStatus,
        GarageCommand::RequestDisableAutoClose,
        GarageCommand::RequestEnableAutoClose,
        GarageCommand::RequestActivate120V1,
        GarageCommand::RequestDeactivate120V1,
        GarageCommand::RequestCpuTemp,
        GarageCommand::RequestTempZone2,
        GarageCommand::RequestClearErrorFlag,
        GarageCommand::RequestPowerSupplyV,
    ];

    /// Get the one-byte code for this command under `mode`.
    pub fn code(&self, mode: EncodingMode) -> u8 {
        match mode {
            EncodingMode::Numeric => match self {
                GarageCommand::RequestFwVer => numeric::GRGE_REQUEST_FW_VER,
                GarageCommand::RequestDoorStatus => numeric::GRGE_REQUEST_DOOR_STATUS,
                GarageCommand::RequestTempZone1 => numeric::GRGE_REQUEST_TEMP_ZONE1,
                GarageCommand::RequestActivateDoor => numeric::GRGE_REQUEST_ACTIVATE_DOOR,
                GarageCommand::RequestAutoCloseStatus => numeric::GRGE_REQUEST_AUTO_CLOSE_STATUS,
                GarageCommand::RequestDisableAutoClose => numeric::GRGE_REQUEST_DISABLE_AUTO_CLOSE,
                GarageCommand::RequestEnableAutoClose => numeric::GRGE_REQUEST_ENABLE_AUTO_CLOSE,
                GarageCommand::RequestActivate120V1 => numeric::GRGE_REQUEST_ACTIVATE_120V1,
                GarageCommand::RequestDeactivate120V1 => numeric::GRGE_REQUEST_DEACTIVATE_120V1,
                GarageCommand::RequestCpuTemp => numeric::GRGE_REQUEST_CPU_TEMP,
                GarageCommand::RequestTempZone2 => numeric::GRGE_REQUEST_TEMP_ZONE2,
                GarageCommand::RequestClearErrorFlag => numeric::GRGE_REQUEST_CLEAR_ERROR_FLAG,
                GarageCommand::RequestPowerSupplyV => numeric::GRGE_REQUEST_POWER_SUPPLY_V,
            },
            EncodingMode::AsciiDebug => match self {
                GarageCommand::RequestFwVer => ascii::GRGE_REQUEST_FW_VER,
                GarageCommand::RequestDoorStatus => ascii::GRGE_REQUEST_DOOR_STATUS,
                GarageCommand::RequestTempZone1 => ascii::GRGE_REQUEST_TEMP_ZONE1,
                GarageCommand::RequestActivateDoor => ascii::GRGE_REQUEST_ACTIVATE_DOOR,
                GarageCommand::RequestAutoCloseStatus => ascii::GRGE_REQUEST_AUTO_CLOSE_STATUS,
                GarageCommand::RequestDisableAutoClose => ascii::GRGE_REQUEST_DISABLE_AUTO_CLOSE,
                GarageCommand::RequestEnableAutoClose => ascii::GRGE_REQUEST_ENABLE_AUTO_CLOSE,
                GarageCommand::RequestActivate120V1 => ascii::GRGE_REQUEST_ACTIVATE_120V1,
                GarageCommand::RequestDeactivate120V1 => ascii::GRGE_REQUEST_DEACTIVATE_120V1,
                GarageCommand::RequestCpuTemp => ascii::GRGE_REQUEST_CPU_TEMP,
                GarageCommand::RequestTempZone2 => ascii::GRGE_REQUEST_TEMP_ZONE2,
                GarageCommand::RequestClearErrorFlag => ascii::GRGE_REQUEST_CLEAR_ERROR_FLAG,
                GarageCommand::RequestPowerSupplyV => ascii::GRGE_REQUEST_POWER_SUPPLY_V,
            },
        }
    }

    /// Look up a received command byte under `mode`.
    ///
    /// Returns `None` for bytes outside the garage's table.
    pub fn from_code(mode: EncodingMode, byte: u8) -> Option<GarageCommand> {
        match mode {
            EncodingMode::Numeric => match byte {
                numeric::GRGE_REQUEST_FW_VER => Some(GarageCommand::RequestFwVer),
                numeric::GRGE_REQUEST_DOOR_STATUS => Some(GarageCommand::RequestDoorStatus),
                numeric::GRGE_REQUEST_TEMP_ZONE1 => Some(GarageCommand::RequestTempZone1),
                numeric::GRGE_REQUEST_ACTIVATE_DOOR => Some(GarageCommand::RequestActivateDoor),
                numeric::GRGE_REQUEST_AUTO_CLOSE_STATUS => Some(GarageCommand::RequestAutoCloseStatus),
                numeric::GRGE_REQUEST_DISABLE_AUTO_CLOSE => Some(GarageCommand::RequestDisableAutoClose),
                numeric::GRGE_REQUEST_ENABLE_AUTO_CLOSE => Some(GarageCommand::RequestEnableAutoClose),
                numeric::GRGE_REQUEST_ACTIVATE_120V1 => Some(GarageCommand::RequestActivate120V1),
                numeric::GRGE_REQUEST_DEACTIVATE_120V1 => Some(GarageCommand::RequestDeactivate120V1),
                numeric::GRGE_REQUEST_CPU_TEMP => Some(GarageCommand::RequestCpuTemp),
                numeric::GRGE_REQUEST_TEMP_ZONE2 => Some(GarageCommand::RequestTempZone2),
                numeric::GRGE_REQUEST_CLEAR_ERROR_FLAG => Some(GarageCommand::RequestClearErrorFlag),
                numeric::GRGE_REQUEST_POWER_SUPPLY_V => Some(GarageCommand::RequestPowerSupplyV),
                _ => None,
            },
            EncodingMode::AsciiDebug => match byte {
                ascii::GRGE_REQUEST_FW_VER => Some(GarageCommand::RequestFwVer),
                ascii::GRGE_REQUEST_DOOR_STATUS => Some(GarageCommand::RequestDoorStatus),
                ascii::GRGE_REQUEST_TEMP_ZONE1 => Some(GarageCommand::RequestTempZone1),
                ascii::GRGE_REQUEST_ACTIVATE_DOOR => Some(GarageCommand::RequestActivateDoor),
                ascii::GRGE_REQUEST_AUTO_CLOSE_STATUS => Some(GarageCommand::RequestAutoCloseStatus),
                ascii::GRGE_REQUEST_DISABLE_AUTO_CLOSE => Some(GarageCommand::RequestDisableAutoClose),
                ascii::GRGE_REQUEST_ENABLE_AUTO_CLOSE => Some(GarageCommand::RequestEnableAutoClose),
                ascii::GRGE_REQUEST_ACTIVATE_120V1 => Some(GarageCommand::RequestActivate120V1),
                ascii::GRGE_REQUEST_DEACTIVATE_120V1 => Some(GarageCommand::RequestDeactivate120V1),
                ascii::GRGE_REQUEST_CPU_TEMP => Some(GarageCommand::RequestCpuTemp),
                ascii::GRGE_REQUEST_TEMP_ZONE2 => Some(GarageCommand::RequestTempZone2),
                ascii::GRGE_REQUEST_CLEAR_ERROR_FLAG => Some(GarageCommand::RequestClearErrorFlag),
                ascii::GRGE_REQUEST_POWER_SUPPLY_V => Some(GarageCommand::RequestPowerSupplyV),
                _ => None,
            },
        }
    }

    /// The firmware's symbolic name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            GarageCommand::RequestFwVer => "requestFWVer",
            GarageCommand::RequestDoorStatus => "requestDoorStatus",
            GarageCommand::RequestTempZone1 => "requestTempZone1",
            GarageCommand::RequestActivateDoor => "requestActivateDoor",
            GarageCommand::RequestAutoCloseStatus => "requestAutoCloseStatus",
            GarageCommand::RequestDisableAutoClose => "requestDisableAutoClose",
            GarageCommand::RequestEnableAutoClose => "requestEnableAutoClose",
            GarageCommand::RequestActivate120V1 => "requestActivate120V1",
            GarageCommand::RequestDeactivate120V1 => "requestDeactivate120V1",
            GarageCommand::RequestCpuTemp => "requestCPUtemp",
            GarageCommand::RequestTempZone2 => "requestTempZone2",
            GarageCommand::RequestClearErrorFlag => "requestClearErrorFlag",
            GarageCommand::RequestPowerSupplyV => "requestPowerSupplyV",
        }
    }
}

/// Commands the controller can send to the bedroom node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedroomCommand {
    /// Request firmware version.
    RequestFwVer,
    /// Request the bedroom temperature reading.
    RequestTemp,
    /// Raise the bedroom set point one step.
    IncreaseSetPoint,
    /// Lower the bedroom set point one step.
    DecreaseSetPoint,
    /// Start holding the bedroom set point.
    MaintainSetPoint,
    /// Stop holding the bedroom set point.
    DontMaintainSetPoint,
    /// Request the current bedroom set point.
    RequestSetPoint,
}

impl BedroomCommand {
    /// Every bedroom command, in table order.
    pub const ALL: &'static [BedroomCommand] = &[
        BedroomCommand::RequestFwVer,
        BedroomCommand::RequestTemp,
        BedroomCommand::IncreaseSetPoint,
        BedroomCommand::DecreaseSetPoint,
        BedroomCommand::MaintainSetPoint,
        BedroomCommand::DontMaintainSetPoint,
        BedroomCommand::RequestSetPoint,
    ];

    /// Get the one-byte code for this command under `mode`.
    pub fn code(&self, mode: EncodingMode) -> u8 {
        match mode {
            EncodingMode::Numeric => match self {
                BedroomCommand::RequestFwVer => numeric::BDRM_REQUEST_FW_VER,
                BedroomCommand::RequestTemp => numeric::BDRM_REQUEST_TEMP,
                BedroomCommand::IncreaseSetPoint => numeric::BDRM_INCREASE_SET_POINT,
                BedroomCommand::DecreaseSetPoint => numeric::BDRM_DECREASE_SET_POINT,
                BedroomCommand::MaintainSetPoint => numeric::BDRM_MAINTAIN_SET_POINT,
                BedroomCommand::DontMaintainSetPoint => numeric::BDRM_DONT_MAINTAIN_SET_POINT,
                BedroomCommand::RequestSetPoint => numeric::BDRM_REQUEST_SET_POINT,
            },
            EncodingMode::AsciiDebug => match self {
                BedroomCommand::RequestFwVer => ascii::BDRM_REQUEST_FW_VER,
                BedroomCommand::RequestTemp => ascii::BDRM_REQUEST_TEMP,
                BedroomCommand::IncreaseSetPoint => ascii::BDRM_INCREASE_SET_POINT,
                BedroomCommand::DecreaseSetPoint => ascii::BDRM_DECREASE_SET_POINT,
                BedroomCommand::MaintainSetPoint => ascii::BDRM_MAINTAIN_SET_POINT,
                BedroomCommand::DontMaintainSetPoint => ascii::BDRM_DONT_MAINTAIN_SET_POINT,
                BedroomCommand::RequestSetPoint => ascii::BDRM_REQUEST_SET_POINT,
            },
        }
    }

    /// Look up a received command byte under `mode`.
    ///
    /// Returns `None` for bytes outside the bedroom's table.
    pub fn from_code(mode: EncodingMode, byte: u8) -> Option<BedroomCommand> {
        match mode {
            EncodingMode::Numeric => match byte {
                numeric::BDRM_REQUEST_FW_VER => Some(BedroomCommand::RequestFwVer),
                numeric::BDRM_REQUEST_TEMP => Some(BedroomCommand::RequestTemp),
                numeric::BDRM_INCREASE_SET_POINT => Some(BedroomCommand::IncreaseSetPoint),
                numeric::BDRM_DECREASE_SET_POINT => Some(BedroomCommand::DecreaseSetPoint),
                numeric::BDRM_MAINTAIN_SET_POINT => Some(BedroomCommand::MaintainSetPoint),
                numeric::BDRM_DONT_MAINTAIN_SET_POINT => Some(BedroomCommand::DontMaintainSetPoint),
                numeric::BDRM_REQUEST_SET_POINT => Some(BedroomCommand::RequestSetPoint),
                _ => None,
            },
            EncodingMode::AsciiDebug => match byte {
                ascii::BDRM_REQUEST_FW_VER => Some(BedroomCommand::RequestFwVer),
                ascii::BDRM_REQUEST_TEMP => Some(BedroomCommand::RequestTemp),
                ascii::BDRM_INCREASE_SET_POINT => Some(BedroomCommand::IncreaseSetPoint),
                ascii::BDRM_DECREASE_SET_POINT => Some(BedroomCommand::DecreaseSetPoint),
                ascii::BDRM_MAINTAIN_SET_POINT => Some(BedroomCommand::MaintainSetPoint),
                ascii::BDRM_DONT_MAINTAIN_SET_POINT => Some(BedroomCommand::DontMaintainSetPoint),
                ascii::BDRM_REQUEST_SET_POINT => Some(BedroomCommand::RequestSetPoint),
                _ => None,
            },
        }
    }

    /// The firmware's symbolic name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            BedroomCommand::RequestFwVer => "requestFWVer",
            BedroomCommand::RequestTemp => "requestTemp",
            BedroomCommand::IncreaseSetPoint => "increaseSetPoint",
            BedroomCommand::DecreaseSetPoint => "decreaseSetPoint",
            BedroomCommand::MaintainSetPoint => "maintainSetPoint",
            BedroomCommand::DontMaintainSetPoint => "dontMaintainSetPoint",
            BedroomCommand::RequestSetPoint => "requestSetPoint",
        }
    }
}

/// A command from any node's namespace.
///
/// Mostly useful for tooling that works across namespaces, like the
/// collision audit; the dispatch path on a node only ever deals with its own
/// command enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCommand {
    /// A controller command.
    Controller(ControllerCommand),
    /// A basement command.
    Basement(BasementCommand),
    /// A garage command.
    Garage(GarageCommand),
    /// A bedroom command.
    Bedroom(BedroomCommand),
}

impl NodeCommand {
    /// Get the one-byte code for this command under `mode`.
    pub fn code(&self, mode: EncodingMode) -> u8 {
        match self {
            NodeCommand::Controller(c) => c.code(mode),
            NodeCommand::Basement(c) => c.code(mode),
            NodeCommand::Garage(c) => c.code(mode),
            NodeCommand::Bedroom(c) => c.code(mode),
        }
    }

    /// The firmware's symbolic name for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCommand::Controller(c) => c.as_str(),
            NodeCommand::Basement(c) => c.as_str(),
            NodeCommand::Garage(c) => c.as_str(),
            NodeCommand::Bedroom(c) => c.as_str(),
        }
    }
}

impl From<ControllerCommand> for NodeCommand {
    fn from(c: ControllerCommand) -> Self {
        NodeCommand::Controller(c)
    }
}

impl From<BasementCommand> for NodeCommand {
    fn from(c: BasementCommand) -> Self {
        NodeCommand::Basement(c)
    }
}

impl From<GarageCommand> for NodeCommand {
    fn from(c: GarageCommand) -> Self {
        NodeCommand::Garage(c)
    }
}

impl From<BedroomCommand> for NodeCommand {
    fn from(c: BedroomCommand) -> Self {
        NodeCommand::Bedroom(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ControllerCommand::RequestFwVer.code(EncodingMode::Numeric), 75);
        assert_eq!(ControllerCommand::RequestFwVer.code(EncodingMode::AsciiDebug), b'K');
        assert_eq!(ControllerCommand::ListCommands.code(EncodingMode::AsciiDebug), b'?');
        assert_eq!(ControllerCommand::LogOff.code(EncodingMode::AsciiDebug), b'x');
        assert_eq!(GarageCommand::RequestFwVer.code(EncodingMode::Numeric), 0);
        assert_eq!(GarageCommand::RequestFwVer.code(EncodingMode::AsciiDebug), b'0');
        assert_eq!(GarageCommand::RequestPowerSupplyV.code(EncodingMode::AsciiDebug), b'c');
        assert_eq!(BasementCommand::RequestCpuTemp.code(EncodingMode::Numeric), 43);
        assert_eq!(BedroomCommand::RequestSetPoint.code(EncodingMode::AsciiDebug), b'o');
    }

    #[test]
    fn test_from_code_round_trip() {
        for mode in [EncodingMode::Numeric, EncodingMode::AsciiDebug] {
            for &cmd in ControllerCommand::ALL {
                assert_eq!(ControllerCommand::from_code(mode, cmd.code(mode)), Some(cmd));
            }
            for &cmd in BasementCommand::ALL {
                assert_eq!(BasementCommand::from_code(mode, cmd.code(mode)), Some(cmd));
            }
            for &cmd in GarageCommand::ALL {
                assert_eq!(GarageCommand::from_code(mode, cmd.code(mode)), Some(cmd));
            }
            for &cmd in BedroomCommand::ALL {
                assert_eq!(BedroomCommand::from_code(mode, cmd.code(mode)), Some(cmd));
            }
        }
    }

    #[test]
    fn test_from_code_unknown_byte() {
        assert_eq!(BasementCommand::from_code(EncodingMode::Numeric, 200), None);
        assert_eq!(BasementCommand::from_code(EncodingMode::AsciiDebug, b'z'), None);
        assert_eq!(BedroomCommand::from_code(EncodingMode::Numeric, 127), None);
    }

    #[test]
    fn test_ascii_codes_are_printable() {
        let commands: Vec<NodeCommand> = ControllerCommand::ALL
            .iter()
            .map(|&c| NodeCommand::from(c))
            .chain(BasementCommand::ALL.iter().map(|&c| NodeCommand::from(c)))
            .chain(GarageCommand::ALL.iter().map(|&c| NodeCommand::from(c)))
            .chain(BedroomCommand::ALL.iter().map(|&c| NodeCommand::from(c)))
            .collect();

        for cmd in commands {
            let code = cmd.code(EncodingMode::AsciiDebug);
            assert!(
                code.is_ascii_graphic(),
                "{} has non-printable ASCII code 0x{:02X}",
                cmd.as_str(),
                code
            );
        }
    }
}
