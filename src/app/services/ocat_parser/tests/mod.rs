//! Tests for the OCAT response parser


/// Columns used by the shared test fixture, in service order
pub const FIXTURE_COLUMNS: &[&str] = &[
    "SEQ_NUM",
    "STATUS",
    "OBSID",
    "TARGET_NAME",
    "INSTR",
    "GRAT",
    "OBS_CYCLE",
    "SOE_ROLL",
    "EXP_TIME",
    "COUNT_RATE",
    "EVENT_COUNT",
    "Y_OFF",
    "Z_OFF",
    "VMAG",
    "DITHER",
];

/// Build a response body in the service's wire format: column-name row,
/// separator row, then the given tab-joined data rows.
pub fn fixture_response(data_rows: &[&str]) -> String {
    let header = FIXTURE_COLUMNS.join("\t");
    let separator = FIXTURE_COLUMNS
        .iter()
        .map(|_| "--------")
        .collect::<Vec<_>>()
        .join("\t");

    let mut body = format!("{}\r\n{}\r\n", header, separator);
    for row in data_rows {
        body.push_str(row);
        body.push_str("\r\n");
    }
    body
}

/// A realistic archived ACIS observation row matching [`FIXTURE_COLUMNS`]
pub const ROW_NGC1275: &str =
    "901\tarchived\t1234\tNGC 1275\tACIS-S\tNONE\t14\t95.3\t24.5\t1.55\t170000\t0.25\t-0.25\t11.2\tY";

/// A second row with null pointing offsets and magnitude
pub const ROW_3C273: &str =
    "902\tobserved\t5678\t3C 273\tHRC-I\tLETG\t15\t120.0\t10.0\t2.1\t50000\t\t\tNone\tN";
