//! Integration tests for the OCAT response parser
//!
//! These tests drive the public parser API with a captured-style response
//! body covering the full typed column set, verifying end-to-end typing
//! and unit tagging.

use ocat_client::app::services::ocat_parser::{ColumnType, OcatTableParser, TypingTable};
use ocat_client::{Error, FieldValue, Unit};

/// A response body shaped like the service's `format=text` output: column
/// names, a separator row, then tab-delimited data rows.
fn ocat_response() -> String {
    let columns = [
        "SEQ_NUM",
        "STATUS",
        "OBSID",
        "PR_NUM",
        "TARGET_NAME",
        "GRID_NAME",
        "INSTR",
        "GRAT",
        "OBS_CYCLE",
        "PROP_CYCLE",
        "CHARGE_CYCLE",
        "START_DATE",
        "RA",
        "DEC",
        "SOE_ROLL",
        "EXP_TIME",
        "APP_EXP",
        "COUNT_RATE",
        "EST_CNT_RATE",
        "EVENT_COUNT",
        "Y_OFF",
        "Z_OFF",
        "X_SIM",
        "Z_SIM",
        "VMAG",
        "DITHER",
        "UNINT",
        "STRT_ROW",
        "ROW_CNT",
        "F_TIME",
    ];
    let header = columns.join("\t");
    let separator = columns.iter().map(|_| "------").collect::<Vec<_>>().join("\t");

    let row_one = [
        "901",
        "archived",
        "3103",
        "02700064",
        "NGC 1275",
        "None",
        "ACIS-S",
        "NONE",
        "2",
        "2",
        "2",
        "2000-01-29 11:47:49",
        "03 19 48.10",
        "+41 30 42.00",
        "95.3",
        "24.5",
        "25.0",
        "1.55",
        "1.2",
        "170000",
        "0.25",
        "-0.25",
        "-190.1426",
        "0.0",
        "11.85",
        "Y",
        "N",
        "0",
        "1024",
        "3.2",
    ]
    .join("\t");

    let row_two = [
        "902",
        "observed",
        "4182",
        "04700211",
        "3C 273",
        "None",
        "HRC-I",
        "LETG",
        "4",
        "4",
        "4",
        "2003-06-14 03:21:00",
        "12 29 06.70",
        "+02 03 08.60",
        "120.0",
        "10.0",
        "10.0",
        "None",
        "2.1",
        "50000",
        "",
        "",
        "0.0",
        "0.0",
        "12.86",
        "Y",
        "N",
        "0",
        "1024",
        "3.2",
    ]
    .join("\t");

    format!("{header}\r\n{separator}\r\n{row_one}\r\n{row_two}\r\n")
}

#[test]
fn test_parse_full_response_end_to_end() {
    let result = OcatTableParser::new()
        .parse(&ocat_response())
        .expect("fixture response should parse");

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.stats.rows_parsed, 2);
    assert_eq!(result.stats.columns, 30);

    let row = &result.rows[0];
    assert_eq!(row.obsid(), "3103");
    assert_eq!(row.field_count(), 30);
}

#[test]
fn test_every_declared_column_is_typed_and_tagged() {
    let result = OcatTableParser::new().parse(&ocat_response()).unwrap();
    let typing = TypingTable::standard();
    let row = &result.rows[0];

    // Every fetched column present in the typing table carries its
    // declared type and unit after parsing
    for name in row.field_names() {
        let field = row.field(name).unwrap();
        match typing.column_type(name) {
            Some(ColumnType::Float) => {
                assert!(
                    matches!(field.value, FieldValue::Float(_)),
                    "{} should be float",
                    name
                );
            }
            Some(ColumnType::UInt) => {
                assert!(
                    matches!(field.value, FieldValue::UInt(_)),
                    "{} should be uint",
                    name
                );
            }
            Some(ColumnType::Text) | None => {}
        }
        assert_eq!(field.unit, typing.unit(name), "unit tag for {}", name);
    }

    let exp_time = row.field("EXP_TIME").unwrap();
    assert_eq!(exp_time.value, FieldValue::Float(24.5));
    assert_eq!(exp_time.unit, Some(Unit::Kilosecond));

    let x_sim = row.field("X_SIM").unwrap();
    assert_eq!(x_sim.value, FieldValue::Float(-190.1426));
    assert_eq!(x_sim.unit, Some(Unit::Millimeter));
}

#[test]
fn test_untyped_columns_pass_through_as_text() {
    let result = OcatTableParser::new().parse(&ocat_response()).unwrap();
    let row = &result.rows[0];

    let start_date = row.field("START_DATE").unwrap();
    assert_eq!(
        start_date.value,
        FieldValue::Text("2000-01-29 11:47:49".to_string())
    );
    assert_eq!(start_date.unit, None);

    let ra = row.field("RA").unwrap();
    assert_eq!(ra.value, FieldValue::Text("03 19 48.10".to_string()));
}

#[test]
fn test_null_markers_survive_typed_columns() {
    let result = OcatTableParser::new().parse(&ocat_response()).unwrap();
    let row = &result.rows[1];

    // COUNT_RATE is the literal None marker, offsets are blank
    assert!(row.field("COUNT_RATE").unwrap().value.is_null());
    assert!(row.field("Y_OFF").unwrap().value.is_null());
    assert!(row.field("Z_OFF").unwrap().value.is_null());

    // The null count rate still carries the column's unit tag
    assert_eq!(row.field("COUNT_RATE").unwrap().unit, Some(Unit::PerSecond));
}

#[test]
fn test_bad_numeric_token_fails_the_parse() {
    let body = ocat_response().replace("\t170000\t", "\toverflow\t");
    match OcatTableParser::new().parse(&body) {
        Err(Error::Coercion { column, value, .. }) => {
            assert_eq!(column, "EVENT_COUNT");
            assert_eq!(value, "overflow");
        }
        other => panic!("expected coercion error, got {:?}", other),
    }
}
