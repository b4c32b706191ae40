mod login;
pub use login::Login;

mod dashboard_layout;
pub use dashboard_layout::DashboardLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod pending;
pub use pending::Pending;

mod approved;
pub use approved::Approved;

mod org_detail;
pub use org_detail::OrganizationDetail;
