// Lower 16 capability bits, the only ones carried by the greeting's
// capability field.
pub const CLIENT_LONG_PASSWORD: u16 = 0x0001;
pub const CLIENT_FOUND_ROWS: u16 = 0x0002;
pub const CLIENT_LONG_FLAG: u16 = 0x0004;
pub const CLIENT_CONNECT_WITH_DB: u16 = 0x0008;
pub const CLIENT_NO_SCHEMA: u16 = 0x0010;
pub const CLIENT_COMPRESS: u16 = 0x0020;
pub const CLIENT_ODBC: u16 = 0x0040;
pub const CLIENT_LOCAL_FILES: u16 = 0x0080;
pub const CLIENT_IGNORE_SPACE: u16 = 0x0100;
pub const CLIENT_PROTOCOL_41: u16 = 0x0200;
pub const CLIENT_INTERACTIVE: u16 = 0x0400;
pub const CLIENT_SSL: u16 = 0x0800;
pub const CLIENT_IGNORE_SIGPIPE: u16 = 0x1000;
pub const CLIENT_TRANSACTIONS: u16 = 0x2000;
pub const CLIENT_RESERVED: u16 = 0x4000;
pub const CLIENT_SECURE_CONNECTION: u16 = 0x8000;

pub const SERVER_STATUS_IN_TRANS: u16 = 0x0001;
pub const SERVER_STATUS_AUTOCOMMIT: u16 = 0x0002;
pub const SERVER_MORE_RESULTS_EXISTS: u16 = 0x0008;
pub const SERVER_QUERY_NO_GOOD_INDEX_USED: u16 = 0x0010;
pub const SERVER_QUERY_NO_INDEX_USED: u16 = 0x0020;
pub const SERVER_STATUS_CURSOR_EXISTS: u16 = 0x0040;
pub const SERVER_STATUS_LAST_ROW_SENT: u16 = 0x0080;
pub const SERVER_STATUS_DB_DROPPED: u16 = 0x0100;
pub const SERVER_STATUS_NO_BACKSLASH_ESCAPES: u16 = 0x0200;
pub const SERVER_STATUS_METADATA_CHANGED: u16 = 0x0400;
pub const SERVER_QUERY_WAS_SLOW: u16 = 0x0800;
pub const SERVER_PS_OUT_PARAMS: u16 = 0x1000;
pub const SERVER_STATUS_IN_TRANS_READONLY: u16 = 0x2000;

pub static CAPABILITIES: &[(u16, &str)] = &[
    (CLIENT_LONG_PASSWORD, "CLIENT_LONG_PASSWORD"),
    (CLIENT_FOUND_ROWS, "CLIENT_FOUND_ROWS"),
    (CLIENT_LONG_FLAG, "CLIENT_LONG_FLAG"),
    (CLIENT_CONNECT_WITH_DB, "CLIENT_CONNECT_WITH_DB"),
    (CLIENT_NO_SCHEMA, "CLIENT_NO_SCHEMA"),
    (CLIENT_COMPRESS, "CLIENT_COMPRESS"),
    (CLIENT_ODBC, "CLIENT_ODBC"),
    (CLIENT_LOCAL_FILES, "CLIENT_LOCAL_FILES"),
    (CLIENT_IGNORE_SPACE, "CLIENT_IGNORE_SPACE"),
    (CLIENT_PROTOCOL_41, "CLIENT_PROTOCOL_41"),
    (CLIENT_INTERACTIVE, "CLIENT_INTERACTIVE"),
    (CLIENT_SSL, "CLIENT_SSL"),
    (CLIENT_IGNORE_SIGPIPE, "CLIENT_IGNORE_SIGPIPE"),
    (CLIENT_TRANSACTIONS, "CLIENT_TRANSACTIONS"),
    (CLIENT_RESERVED, "CLIENT_RESERVED"),
    (CLIENT_SECURE_CONNECTION, "CLIENT_SECURE_CONNECTION"),
];

// 0x0004 is unused by the server.
pub static SERVER_STATUS: &[(u16, &str)] = &[
    (SERVER_STATUS_IN_TRANS, "SERVER_STATUS_IN_TRANS"),
    (SERVER_STATUS_AUTOCOMMIT, "SERVER_STATUS_AUTOCOMMIT"),
    (SERVER_MORE_RESULTS_EXISTS, "SERVER_MORE_RESULTS_EXISTS"),
    (SERVER_QUERY_NO_GOOD_INDEX_USED, "SERVER_QUERY_NO_GOOD_INDEX_USED"),
    (SERVER_QUERY_NO_INDEX_USED, "SERVER_QUERY_NO_INDEX_USED"),
    (SERVER_STATUS_CURSOR_EXISTS, "SERVER_STATUS_CURSOR_EXISTS"),
    (SERVER_STATUS_LAST_ROW_SENT, "SERVER_STATUS_LAST_ROW_SENT"),
    (SERVER_STATUS_DB_DROPPED, "SERVER_STATUS_DB_DROPPED"),
    (SERVER_STATUS_NO_BACKSLASH_ESCAPES, "SERVER_STATUS_NO_BACKSLASH_ESCAPES"),
    (SERVER_STATUS_METADATA_CHANGED, "SERVER_STATUS_METADATA_CHANGED"),
    (SERVER_QUERY_WAS_SLOW, "SERVER_QUERY_WAS_SLOW"),
    (SERVER_PS_OUT_PARAMS, "SERVER_PS_OUT_PARAMS"),
    (SERVER_STATUS_IN_TRANS_READONLY, "SERVER_STATUS_IN_TRANS_READONLY"),
];

/// Names of every table entry whose bit is set in `bitmask`, in table order.
/// Bits without an entry are ignored.
pub fn flag_names(bitmask: u16, table: &[(u16, &'static str)]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(bit, _)| bit & bitmask != 0)
        .map(|(_, name)| *name)
        .collect()
}
