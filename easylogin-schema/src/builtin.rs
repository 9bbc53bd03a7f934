//! Compiled-in mapping definitions for EasyLogin records.

use crate::attrs::*;
use crate::{SchemaError, SchemaMappingTable, ValueShape};

/// Version of the definitions returned by [`builtin_table`].
pub const BUILTIN_TABLE_VERSION: u32 = 1;

/// Builds the table for the EasyLogin backend's `user`, `usergroup` and
/// `device` records.
///
/// Where several native attributes feed one standard attribute they are
/// listed highest precedence first.
pub fn builtin_table() -> Result<SchemaMappingTable, SchemaError> {
    SchemaMappingTable::builder(BUILTIN_TABLE_VERSION)
        .native_type("user", USERS, |t| {
            t.list(RECORD_NAME, &["shortname", "principalName"])
                .scalar(REAL_NAME, "fullName")
                .scalar(FIRST_NAME, "givenName")
                .scalar(LAST_NAME, "surname")
                .list(EMAIL_ADDRESS, &["email"])
                .scalar(UNIQUE_ID, "uid")
                .scalar(PRIMARY_GROUP_ID, "gid")
                .scalar(GENERATED_UID, "uuid")
                .scalar(NFS_HOME_DIRECTORY, "homeDirectory")
                .scalar(USER_SHELL, "shell")
                .map(JPEG_PHOTO, ["picture"], ValueShape::Binary)
                .list(AUTHENTICATION_AUTHORITY, &["authAuthority"])
                .map(CREATION_TIMESTAMP, ["created_at"], ValueShape::Date)
                .map(MODIFICATION_TIMESTAMP, ["updated_at"], ValueShape::Date)
        })
        .native_type("usergroup", GROUPS, |t| {
            t.list(RECORD_NAME, &["shortname"])
                .scalar(REAL_NAME, "commonName")
                .scalar(GENERATED_UID, "uuid")
                .scalar(PRIMARY_GROUP_ID, "gid")
                .list(GROUP_MEMBERSHIP, &["members"])
                .list(NESTED_GROUPS, &["nestedGroups"])
        })
        .native_type("device", COMPUTERS, |t| {
            t.list(RECORD_NAME, &["deviceName", "serialNumber"])
                .scalar(GENERATED_UID, "uuid")
                .scalar(HARDWARE_UUID, "hardwareUUID")
                .list(ENET_ADDRESS, &["macAddress"])
        })
        .build()
}
