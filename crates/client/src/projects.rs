use crate::client::PmtClient;
use crate::error::ClientResult;
use pmt_domain::project::{Project, ProjectMember, ProjectMemberCreate, Role};
use reqwest::Method;

impl PmtClient {
    // ── Projects ──────────────────────────────────────────────────────

    /// `GET /projects`
    pub async fn projects(&self) -> ClientResult<Vec<Project>> {
        self.get_json("/projects").await
    }

    /// `GET /projects/{id}`
    pub async fn project(&self, id: i64) -> ClientResult<Project> {
        self.get_json(&format!("/projects/{id}")).await
    }

    /// `POST /projects?createdById={sessionUser}`
    ///
    /// Requires a session; the creator id always comes from the logged-in
    /// user, not from the payload.
    pub async fn create_project(&self, project: &Project) -> ClientResult<Project> {
        let created_by = self.session_user_id()?;
        self.send_json(Method::POST, &format!("/projects?createdById={created_by}"), Some(project))
            .await
    }

    /// `PUT /projects/{id}`
    pub async fn update_project(&self, id: i64, project: &Project) -> ClientResult<Project> {
        self.send_json(Method::PUT, &format!("/projects/{id}"), Some(project)).await
    }

    /// `DELETE /projects/{id}`
    pub async fn delete_project(&self, id: i64) -> ClientResult<()> {
        self.send_no_content::<()>(Method::DELETE, &format!("/projects/{id}"), None).await
    }

    // ── Project members ───────────────────────────────────────────────

    /// `GET /project-members/project/{projectId}`
    pub async fn project_members(&self, project_id: i64) -> ClientResult<Vec<ProjectMember>> {
        self.get_json(&format!("/project-members/project/{project_id}")).await
    }

    /// `POST /project-members`
    pub async fn add_project_member(
        &self,
        member: &ProjectMemberCreate,
    ) -> ClientResult<ProjectMember> {
        self.send_json(Method::POST, "/project-members", Some(member)).await
    }

    /// `PUT /project-members/{id}`
    pub async fn update_project_member(
        &self,
        id: i64,
        member: &ProjectMember,
    ) -> ClientResult<ProjectMember> {
        self.send_json(Method::PUT, &format!("/project-members/{id}"), Some(member)).await
    }

    /// `DELETE /project-members/{id}`
    pub async fn remove_project_member(&self, id: i64) -> ClientResult<()> {
        self.send_no_content::<()>(Method::DELETE, &format!("/project-members/{id}"), None).await
    }

    /// `PUT /project-members/{memberId}/role/{roleId}`
    pub async fn update_member_role(
        &self,
        member_id: i64,
        role_id: i64,
    ) -> ClientResult<ProjectMember> {
        self.send_json::<ProjectMember, ()>(
            Method::PUT,
            &format!("/project-members/{member_id}/role/{role_id}"),
            None,
        )
        .await
    }

    /// `GET /project-members/check/{projectId}/{userId}`
    ///
    /// Answers `None` when the user is not a member (the API returns `null`).
    pub async fn check_project_membership(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> ClientResult<Option<ProjectMember>> {
        self.get_json(&format!("/project-members/check/{project_id}/{user_id}")).await
    }

    /// `GET /project-members/role/{roleId}`
    pub async fn members_by_role(&self, role_id: i64) -> ClientResult<Vec<ProjectMember>> {
        self.get_json(&format!("/project-members/role/{role_id}")).await
    }

    // ── Roles ─────────────────────────────────────────────────────────

    /// `GET /roles`
    pub async fn roles(&self) -> ClientResult<Vec<Role>> {
        self.get_json("/roles").await
    }

    /// `GET /roles/{id}`
    pub async fn role(&self, id: i64) -> ClientResult<Role> {
        self.get_json(&format!("/roles/{id}")).await
    }
}
