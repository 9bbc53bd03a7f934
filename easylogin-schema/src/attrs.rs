//! Standard attribute and record type names used by the built-in table.

pub const RECORD_NAME: &str = "RecordName";
pub const REAL_NAME: &str = "RealName";
pub const FIRST_NAME: &str = "FirstName";
pub const LAST_NAME: &str = "LastName";
pub const EMAIL_ADDRESS: &str = "EMailAddress";
pub const UNIQUE_ID: &str = "UniqueID";
pub const PRIMARY_GROUP_ID: &str = "PrimaryGroupID";
pub const GENERATED_UID: &str = "GeneratedUID";
pub const NFS_HOME_DIRECTORY: &str = "NFSHomeDirectory";
pub const USER_SHELL: &str = "UserShell";
pub const JPEG_PHOTO: &str = "JPEGPhoto";
pub const AUTHENTICATION_AUTHORITY: &str = "AuthenticationAuthority";
pub const CREATION_TIMESTAMP: &str = "CreationTimestamp";
pub const MODIFICATION_TIMESTAMP: &str = "ModificationTimestamp";
pub const GROUP_MEMBERSHIP: &str = "GroupMembership";
pub const NESTED_GROUPS: &str = "NestedGroups";
pub const HARDWARE_UUID: &str = "HardwareUUID";
pub const ENET_ADDRESS: &str = "ENetAddress";

/// Matches every attribute of a record; used by free-text searches.
pub const ALL_ATTRIBUTES: &str = "AllAttributes";

pub const USERS: &str = "Users";
pub const GROUPS: &str = "Groups";
pub const COMPUTERS: &str = "Computers";
