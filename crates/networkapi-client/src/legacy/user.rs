//! Users, user groups and their memberships

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde_json::{Value, json};

/// User (`usuario`) façade
#[derive(Debug, Clone)]
pub struct User {
    client: GenericClient,
}

impl User {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Insert a user, returning its new id
    pub async fn add(
        &self,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
        user_ldap: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        require_text(username, "Username")?;
        require_text(password, "Password")?;
        let payload = json!({
            "user": {
                "user": username,
                "pwd": password,
                "name": name,
                "email": email,
                "user_ldap": user_ldap,
            }
        });
        narrow(self.client.post("user/", &payload, &[]).await?, "usuario")
    }

    /// Edit a user
    pub async fn alter(
        &self,
        id_user: impl IdParam,
        username: &str,
        password: &str,
        name: &str,
        email: &str,
        active: bool,
        user_ldap: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user, "User id")?;
        require_text(username, "Username")?;
        let payload = json!({
            "user": {
                "user": username,
                "pwd": password,
                "name": name,
                "email": email,
                "active": active,
                "user_ldap": user_ldap,
            }
        });
        self.client.put(&format!("user/{id}/"), &payload, &[]).await
    }

    /// Remove a user
    pub async fn remove(&self, id_user: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user, "User id")?;
        self.client.delete(&format!("user/{id}/")).await
    }

    /// Get one user
    pub async fn get_by_id(&self, id_user: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user, "User id")?;
        narrow(self.client.get(&format!("user/get/{id}/"), &[]).await?, "usuario")
    }

    /// Get a user by LDAP login
    pub async fn get_by_user_ldap(&self, user_ldap: &str) -> Result<Value, NetworkApiError> {
        require_text(user_ldap, "LDAP user")?;
        narrow(
            self.client.get(&format!("user/get/ldap/{}/", segment(user_ldap)), &[]).await?,
            "usuario",
        )
    }

    /// List every user
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client.get("usuario/all/", &["usuario"]).await
    }

    /// List every user with its groups
    pub async fn list_with_usergroup(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("usuario/get/", &["usuario", "usuario/grupos"])
            .await
    }

    /// List the users of a group
    pub async fn list_by_group(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        self.client
            .get(&format!("usuario/grupo/{id}/"), &["usuarios"])
            .await
    }

    /// List the users outside a group
    pub async fn list_by_group_out(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        self.client
            .get(&format!("usuario/out/grupo/{id}/"), &["usuarios"])
            .await
    }

    /// Change a user's password
    pub async fn change_password(&self, id_user: impl IdParam, username: &str, password: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user, "User id")?;
        require_text(username, "Username")?;
        require_text(password, "Password")?;
        let payload = json!({
            "change_pass": {
                "user_id": id,
                "user": username,
                "pass": password,
            }
        });
        self.client.post("user-change-pass/", &payload, &[]).await
    }

    /// Authenticate a local user, returning the user with its permissions
    pub async fn authenticate(&self, username: &str, password: &str, is_ldap_user: bool) -> Result<Value, NetworkApiError> {
        require_text(username, "Username")?;
        require_text(password, "Password")?;
        let payload = json!({
            "user": {
                "username": username,
                "password": password,
                "is_ldap_user": is_ldap_user,
            }
        });
        self.client
            .post("authenticate/", &payload, &["permission"])
            .await
    }

    /// Authenticate an LDAP user
    pub async fn authenticate_ldap(&self, username: &str, password: &str) -> Result<Value, NetworkApiError> {
        require_text(username, "Username")?;
        require_text(password, "Password")?;
        let payload = json!({
            "user": {
                "username": username,
                "password": password,
            }
        });
        self.client
            .post("authenticate/ldap/", &payload, &["permission"])
            .await
    }
}

/// User group (`ugrupo`) façade
#[derive(Debug, Clone)]
pub struct UserGroup {
    client: GenericClient,
}

impl UserGroup {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Insert a user group, returning its new id
    ///
    /// The four flags grant read, write, edit and delete rights on every equipment group.
    pub async fn insert(
        &self,
        name: &str,
        read: bool,
        write: bool,
        edit: bool,
        remove: bool,
    ) -> Result<Value, NetworkApiError> {
        require_text(name, "Group name")?;
        let payload = json!({ "user_group": rights_map(name, read, write, edit, remove) });
        narrow(self.client.post("ugroup/", &payload, &[]).await?, "user_group")
    }

    /// Edit a user group
    pub async fn update(
        &self,
        id_group: impl IdParam,
        name: &str,
        read: bool,
        write: bool,
        edit: bool,
        remove: bool,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        require_text(name, "Group name")?;
        let payload = json!({ "user_group": rights_map(name, read, write, edit, remove) });
        self.client.put(&format!("ugroup/{id}/"), &payload, &[]).await
    }

    /// Remove a user group
    pub async fn remove(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        self.client.delete(&format!("ugroup/{id}/")).await
    }

    /// Get one user group
    pub async fn get(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        narrow(self.client.get(&format!("ugroup/get/{id}/"), &[]).await?, "user_group")
    }

    /// List every user group
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client.get("ugroup/all/", &["user_group"]).await
    }
}

fn rights_map(name: &str, read: bool, write: bool, edit: bool, remove: bool) -> Value {
    // The server expects the rights as `S`/`N` flags
    let flag = |value: bool| if value { "S" } else { "N" };
    json!({
        "nome": name,
        "leitura": flag(read),
        "escrita": flag(write),
        "edicao": flag(edit),
        "exclusao": flag(remove),
    })
}

/// Association between users and user groups
#[derive(Debug, Clone)]
pub struct GroupMembership {
    client: GenericClient,
}

impl GroupMembership {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Add a user to a group
    pub async fn associate(&self, id_user: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_user = require_id(&id_user, "User id")?;
        let id_group = require_id(&id_group, "Group id")?;
        self.client
            .request(
                HttpMethod::Put,
                &format!("usergroup/user/{id_user}/ugroup/{id_group}/associate/"),
                None,
                &[],
            )
            .await
    }

    /// Remove a user from a group
    pub async fn dissociate(&self, id_user: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_user = require_id(&id_user, "User id")?;
        let id_group = require_id(&id_group, "Group id")?;
        self.client
            .delete(&format!("usergroup/user/{id_user}/ugroup/{id_group}/dissociate/"))
            .await
    }
}
