#[cfg(test)]
mod tests {
    use battlog::libs::record::{ChargingRecord, Field, DEFORMATION_CHOICES, TEMPERATURE_CHOICES};
    use serde_json::Value;

    #[test]
    fn test_payload_uses_service_keys_in_schema_order() {
        let mut record = ChargingRecord::default();
        for field in Field::ALL {
            record.set(field, format!("v-{}", field.key()));
        }

        let payload = serde_json::to_value(&record).unwrap();
        let object = payload.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let expected: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();

        assert_eq!(keys, expected);
        assert_eq!(object.get("id"), Some(&Value::String("v-id".to_string())));
        assert_eq!(object.get("temp"), Some(&Value::String("v-temp".to_string())));
    }

    #[test]
    fn test_missing_keys_deserialize_as_empty() {
        let record: ChargingRecord = serde_json::from_str(r#"{"id": "B-1", "chargeCurrent": "3"}"#).unwrap();
        assert_eq!(record.battery_id, "B-1");
        assert_eq!(record.charge_current, "3");
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_get_and_set_cover_every_field() {
        let mut record = ChargingRecord::default();
        assert!(record.is_blank());
        for field in Field::ALL {
            record.set(field, field.label());
            assert_eq!(record.get(field), field.label());
        }
        assert!(!record.is_blank());
    }

    #[test]
    fn test_field_keys_parse_back() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>(), Ok(field));
        }
        assert!("battery".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_kinds() {
        assert!(Field::Others.is_optional());
        assert!(Field::Duration.is_derived());
        assert!(!Field::Name.is_optional());
        assert_eq!(Field::Temperature.choices(), Some(TEMPERATURE_CHOICES));
        assert_eq!(Field::Deformation.choices(), Some(DEFORMATION_CHOICES));
        assert_eq!(Field::Capacity.choices(), None);
    }

    #[test]
    fn test_declaration_order_is_focus_order() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
        assert!(Field::BatteryId < Field::Name);
    }
}
