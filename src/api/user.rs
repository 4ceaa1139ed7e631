use crate::requests::GetUserInfo;
use crate::session::BoxSession;

/// Identifier the API resolves to the session's own user.
pub const CURRENT_USER_ID: &str = "me";

/// Requests against the `/users` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct UserApi<'a> {
    session: &'a BoxSession,
}

impl<'a> UserApi<'a> {
    pub fn new(session: &'a BoxSession) -> Self {
        UserApi { session }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.session.base_uri())
    }

    pub fn user_information_url(&self, id: &str) -> String {
        format!("{}/{id}", self.users_url())
    }

    pub fn current_user_info_request(&self) -> GetUserInfo<'a> {
        GetUserInfo::new(self.user_information_url(CURRENT_USER_ID), self.session)
    }
}
