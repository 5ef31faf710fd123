use mqtt_protocol_core::mqtt;

#[test]
fn test_short_binary() {
    let small_data = b"hello world"; // 11 bytes + 2 bytes length = 13 bytes total
    let binary = mqtt::packet::MqttBinary::new(small_data).unwrap();

    assert_eq!(binary.as_slice(), small_data);
    assert_eq!(binary.len(), 11);
    assert_eq!(binary.size(), 13); // 2 bytes prefix + 11 bytes data
    assert!(!binary.is_empty());
}

#[test]
fn test_long_binary() {
    let large_data = "x".repeat(100); // 100 bytes + 2 bytes length = 102 bytes total
    let binary = mqtt::packet::MqttBinary::new(large_data.as_bytes()).unwrap();

    assert_eq!(binary.as_slice(), large_data.as_bytes());
    assert_eq!(binary.len(), 100);
    assert_eq!(binary.size(), 102); // 2 bytes prefix + 100 bytes data
    assert!(!binary.is_empty());
}

#[test]
fn test_boundary_exactly_30_bytes_data() {
    let boundary_data = "a".repeat(30); // 30 bytes + 2 bytes length = 32 bytes exactly
    let binary = mqtt::packet::MqttBinary::new(boundary_data.as_bytes()).unwrap();

    assert_eq!(binary.as_slice(), boundary_data.as_bytes());
    assert_eq!(binary.len(), 30);
    assert_eq!(binary.size(), 32);
}

#[test]
fn test_boundary_31_bytes_data() {
    let boundary_data = "a".repeat(31); // 31 bytes + 2 bytes length = 33 bytes
    let binary = mqtt::packet::MqttBinary::new(boundary_data.as_bytes()).unwrap();

    assert_eq!(binary.as_slice(), boundary_data.as_bytes());
    assert_eq!(binary.len(), 31);
    assert_eq!(binary.size(), 33);
}

#[test]
fn test_empty_binary() {
    let empty_binary = mqtt::packet::MqttBinary::new(&[]).unwrap();

    assert_eq!(empty_binary.as_slice(), &[] as &[u8]);
    assert_eq!(empty_binary.len(), 0);
    assert_eq!(empty_binary.size(), 2); // Only length prefix
    assert!(empty_binary.is_empty());
}

#[test]
fn test_binary_data_roundtrip() {
    let test_data = vec![0x00, 0x01, 0xFF, 0xFE, 0x80, 0x7F, 0x42];
    let binary = mqtt::packet::MqttBinary::new(&test_data).unwrap();

    assert_eq!(binary.as_slice(), test_data);
    assert_eq!(binary.len(), 7);
    assert_eq!(binary.size(), 9); // 2 bytes prefix + 7 bytes data

    let encoded = binary.as_bytes();
    let (decoded, consumed) = mqtt::packet::MqttBinary::decode(encoded).unwrap();

    assert_eq!(decoded.as_slice(), test_data);
    assert_eq!(consumed, 9);
}

#[test]
fn test_decode_boundary_conditions() {
    let small_data = "a".repeat(30); // 30 bytes + 2 prefix = 32 bytes exactly
    let small_binary = mqtt::packet::MqttBinary::new(small_data.as_bytes()).unwrap();
    let encoded_small = small_binary.as_bytes();
    let (decoded_small, consumed_small) = mqtt::packet::MqttBinary::decode(encoded_small).unwrap();

    assert_eq!(decoded_small.as_slice(), small_data.as_bytes());
    assert_eq!(consumed_small, 32);

    let large_data = "a".repeat(31); // 31 bytes + 2 prefix = 33 bytes
    let large_binary = mqtt::packet::MqttBinary::new(large_data.as_bytes()).unwrap();
    let encoded_large = large_binary.as_bytes();
    let (decoded_large, consumed_large) = mqtt::packet::MqttBinary::decode(encoded_large).unwrap();

    assert_eq!(decoded_large.as_slice(), large_data.as_bytes());
    assert_eq!(consumed_large, 33);
}

#[test]
fn test_clone_and_equality() {
    let data = b"test data";
    let binary1 = mqtt::packet::MqttBinary::new(data).unwrap();
    let binary2 = binary1.clone();

    assert_eq!(binary1, binary2);
    assert_eq!(binary1.as_slice(), binary2.as_slice());

    let different_binary = mqtt::packet::MqttBinary::new(b"different").unwrap();
    assert_ne!(binary1, different_binary);
}

#[test]
fn test_default() {
    let default_binary = mqtt::packet::MqttBinary::default();

    assert_eq!(default_binary.as_slice(), &[] as &[u8]);
    assert_eq!(default_binary.len(), 0);
    assert_eq!(default_binary.size(), 2); // Only length prefix
    assert!(default_binary.is_empty());
}

#[test]
fn test_try_from_str() {
    let text = "hello world";
    let binary = mqtt::packet::MqttBinary::try_from(text).unwrap();

    assert_eq!(binary.as_slice(), text.as_bytes());
    assert_eq!(binary.len(), 11);
    assert_eq!(binary.size(), 13);
}

#[test]
fn test_as_bytes_vs_as_slice() {
    let data = b"test";
    let binary = mqtt::packet::MqttBinary::new(data).unwrap();

    let as_bytes = binary.as_bytes();
    let as_slice = binary.as_slice();

    // as_bytes should include length prefix
    assert_eq!(as_bytes.len(), 6); // 2 bytes prefix + 4 bytes data
    assert_eq!(as_bytes[0], 0x00); // length high byte
    assert_eq!(as_bytes[1], 0x04); // length low byte
    assert_eq!(&as_bytes[2..], data);

    // as_slice should be just the data
    assert_eq!(as_slice.len(), 4);
    assert_eq!(as_slice, data);
}
