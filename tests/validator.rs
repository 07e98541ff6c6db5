#[cfg(test)]
mod tests {
    use battlog::libs::record::{ChargingRecord, Field};
    use battlog::libs::validator::{is_valid, validate, FieldError, Validator};
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> ChargingRecord {
        ChargingRecord {
            battery_id: "B-17".to_string(),
            date: "2025-03-02".to_string(),
            charging_cycle: "12".to_string(),
            charge_current: "2.5".to_string(),
            batt_volt_initial: "22.1".to_string(),
            batt_volt_final: "25.2".to_string(),
            charge_time_initial: "09:15".to_string(),
            charge_time_final: "11:40".to_string(),
            duration: "2 hours 25 mins".to_string(),
            capacity: "5000".to_string(),
            temperature: "Normal".to_string(),
            deformation: "No".to_string(),
            others: String::new(),
            uin: "UA-0042".to_string(),
            name: "R. Iyer".to_string(),
        }
    }

    #[rstest]
    fn complete_record_is_valid(record: ChargingRecord) {
        assert!(validate(&record).is_empty());
        assert!(is_valid(&record));
    }

    #[rstest]
    fn empty_record_requires_every_mandatory_field() {
        let errors = validate(&ChargingRecord::default());

        assert_eq!(errors.len(), 13);
        assert_eq!(errors.get(Field::Others), None);
        assert_eq!(errors.get(Field::Duration), None);
        for (_, error) in errors.iter() {
            assert_eq!(error, FieldError::Required);
            assert_eq!(error.to_string(), "This field is required");
        }
    }

    #[rstest]
    #[case(Field::BatteryId)]
    #[case(Field::Date)]
    #[case(Field::Capacity)]
    #[case(Field::Temperature)]
    #[case(Field::Name)]
    fn whitespace_only_counts_as_missing(mut record: ChargingRecord, #[case] field: Field) {
        record.set(field, "   ");
        let errors = validate(&record);
        assert_eq!(errors.get(field), Some(FieldError::Required));
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    #[case(Field::ChargeCurrent)]
    #[case(Field::BattVoltInitial)]
    #[case(Field::BattVoltFinal)]
    fn non_numeric_value_is_rejected(mut record: ChargingRecord, #[case] field: Field) {
        record.set(field, "abc");
        let errors = validate(&record);
        assert_eq!(errors.get(field), Some(FieldError::NotANumber));
        assert_eq!(errors.get(field).map(|e| e.to_string()), Some("Must be a number".to_string()));
    }

    #[rstest]
    fn fields_outside_numeric_set_accept_text(mut record: ChargingRecord) {
        record.set(Field::Capacity, "about 5000");
        record.set(Field::ChargingCycle, "twelfth");
        assert!(validate(&record).is_empty());
    }

    #[rstest]
    #[case(Field::Temperature, "Scorching")]
    #[case(Field::Temperature, "normal")]
    #[case(Field::Deformation, "Maybe")]
    fn enumerated_field_rejects_unlisted_value(mut record: ChargingRecord, #[case] field: Field, #[case] value: &str) {
        record.set(field, value);
        let errors = validate(&record);
        assert_eq!(errors.get(field), Some(FieldError::NotAChoice));
        assert_eq!(errors.len(), 1);
    }

    #[rstest]
    #[case(Field::Temperature, "Overheat")]
    #[case(Field::Deformation, " Yes ")]
    fn enumerated_field_accepts_listed_value(mut record: ChargingRecord, #[case] field: Field, #[case] value: &str) {
        record.set(field, value);
        assert!(is_valid(&record));
    }

    #[rstest]
    fn others_may_stay_blank(mut record: ChargingRecord) {
        record.set(Field::Others, "");
        assert!(is_valid(&record));
    }

    #[rstest]
    fn empty_duration_does_not_block(mut record: ChargingRecord) {
        record.set(Field::Duration, "");
        assert!(is_valid(&record));
    }

    #[rstest]
    fn validation_is_idempotent(mut record: ChargingRecord) {
        record.set(Field::Uin, "");
        record.set(Field::ChargeCurrent, "lots");
        assert_eq!(validate(&record), validate(&record));
    }

    #[rstest]
    fn first_error_follows_schema_order(mut record: ChargingRecord) {
        record.set(Field::Name, "");
        record.set(Field::BattVoltFinal, "x");
        record.set(Field::Capacity, "");
        assert_eq!(validate(&record).first(), Some(Field::BattVoltFinal));
    }

    #[rstest]
    fn custom_numeric_set(mut record: ChargingRecord) {
        let validator = Validator::with_numeric_fields([Field::ChargeCurrent, Field::Capacity]);

        record.set(Field::Capacity, "about 5000");
        record.set(Field::BattVoltFinal, "n/a");
        let errors = validator.validate(&record);

        assert_eq!(errors.get(Field::Capacity), Some(FieldError::NotANumber));
        assert_eq!(errors.get(Field::BattVoltFinal), None);
        assert!(!validator.is_valid(&record));
    }

    #[rstest]
    fn empty_numeric_set_only_checks_presence(mut record: ChargingRecord) {
        let validator = Validator::with_numeric_fields(Vec::<Field>::new());
        record.set(Field::ChargeCurrent, "abc");
        assert!(validator.is_valid(&record));
    }
}
