//! End-to-end exchange tests: a command byte followed by a value payload on
//! one scripted stream, the way a node's dispatch loop sees it.

use approx::assert_relative_eq;
use homelink_commands::{
    BasementCommand, BedroomCommand, ControllerCommand, EncodingMode, GarageCommand, Namespace,
    NodeCommand, NodeId,
};
use homelink_serial::{ByteSource, ScriptedSource, SerialError, ValueDecoder};

const DELIM: u8 = b'\r';

#[test]
fn test_basement_temp_request_exchange() {
    // Controller asks the basement for its temperature; the reply payload
    // trails the command byte on the return stream.
    let mut stream = ScriptedSource::new();
    stream.push_bytes(&[BasementCommand::RequestTemp.code(EncodingMode::AsciiDebug)]);
    stream.push_bytes(b"21.5\r");

    let ns = Namespace::new(NodeId::Basement, EncodingMode::AsciiDebug);
    let command_byte = stream.try_read().expect("command byte");
    let command = ns.decode(command_byte).expect("known command");
    assert_eq!(command, NodeCommand::Basement(BasementCommand::RequestTemp));

    let mut decoder = ValueDecoder::new(stream);
    assert_relative_eq!(decoder.read_float(DELIM).unwrap(), 21.5, max_relative = 1e-6);
}

#[test]
fn test_set_bedroom_set_point_exchange() {
    // setBedroomSetPoint carries its target temperature as a float payload.
    let mut stream = ScriptedSource::new();
    stream.push_bytes(&[ControllerCommand::SetBedroomSetPoint.code(EncodingMode::Numeric)]);
    stream.push_bytes(b"17.0\r");

    let ns = Namespace::new(NodeId::Controller, EncodingMode::Numeric);
    let command_byte = stream.try_read().unwrap();
    assert_eq!(
        ns.decode(command_byte).unwrap(),
        NodeCommand::Controller(ControllerCommand::SetBedroomSetPoint)
    );

    let mut decoder = ValueDecoder::new(stream);
    assert_relative_eq!(decoder.read_float(DELIM).unwrap(), 17.0, max_relative = 1e-6);
}

#[test]
fn test_garage_door_status_exchange() {
    // Door status comes back as a boolean: the terminal byte is the value.
    let mut stream = ScriptedSource::new();
    stream.push_bytes(&[GarageCommand::RequestDoorStatus.code(EncodingMode::AsciiDebug)]);
    stream.push_bytes(b"1");

    let ns = Namespace::new(NodeId::Garage, EncodingMode::AsciiDebug);
    let command_byte = stream.try_read().unwrap();
    assert_eq!(
        ns.decode(command_byte).unwrap(),
        NodeCommand::Garage(GarageCommand::RequestDoorStatus)
    );

    let mut decoder = ValueDecoder::new(stream);
    assert!(decoder.read_bool().unwrap());
}

#[test]
fn test_node_goes_silent_mid_exchange() {
    // Command byte arrives but the payload never does: the decoder times
    // out and the exchange fails without poisoning anything else.
    let mut stream = ScriptedSource::new();
    stream.push_bytes(&[BedroomCommand::RequestSetPoint.code(EncodingMode::AsciiDebug)]);

    let ns = Namespace::new(NodeId::Bedroom, EncodingMode::AsciiDebug);
    let command_byte = stream.try_read().unwrap();
    assert!(ns.decode(command_byte).is_ok());

    let mut decoder = ValueDecoder::with_limits(
        stream,
        homelink_serial::PollLimits {
            value_attempts: 100,
            bool_attempts: 200,
        },
    );
    assert!(matches!(
        decoder.read_float(DELIM),
        Err(SerialError::Timeout { .. })
    ));
}

#[test]
fn test_noisy_line_exchange() {
    // Interference between the command byte and the payload is absorbed.
    let mut stream = ScriptedSource::new();
    stream.push_bytes(&[GarageCommand::RequestPowerSupplyV.code(EncodingMode::Numeric)]);
    stream.push_silence(5);
    stream.push_bytes(b"\x7f 12");
    stream.push_silence(3);
    stream.push_bytes(b".6\r");

    let ns = Namespace::new(NodeId::Garage, EncodingMode::Numeric);
    let command_byte = stream.try_read().unwrap();
    assert_eq!(
        ns.decode(command_byte).unwrap(),
        NodeCommand::Garage(GarageCommand::RequestPowerSupplyV)
    );

    let mut decoder = ValueDecoder::new(stream);
    assert_relative_eq!(decoder.read_float(DELIM).unwrap(), 12.6, max_relative = 1e-6);
}
