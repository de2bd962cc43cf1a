//! Object group permission resources

use super::api_resource;

api_resource!(
    /// `api/v3/object-group-perm/`
    ApiObjectGroupPermission, "api/v3/object-group-perm/", "ogps"
);
