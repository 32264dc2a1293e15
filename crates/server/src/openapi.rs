use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct IdentityDoc { pub email: String }

#[derive(ToSchema)]
pub struct SuccessDoc { pub success: bool }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub _id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    pub service_id: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceSummaryDoc {
    pub _id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    pub service_id: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NewBookingDoc {
    pub email: String,
    pub status: Option<String>,
    pub customerName: Option<String>,
    pub img: Option<String>,
    pub date: Option<String>,
    pub service: Option<String>,
    pub service_id: Option<String>,
    pub price: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct BookingDoc {
    pub _id: String,
    pub email: String,
    pub status: Option<String>,
    pub customerName: Option<String>,
    pub img: Option<String>,
    pub date: Option<String>,
    pub service: Option<String>,
    pub service_id: Option<String>,
    pub price: Option<String>,
}

#[derive(ToSchema)]
pub struct StatusUpdateDoc { pub status: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct InsertAckDoc { pub acknowledged: bool, pub insertedId: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UpdateAckDoc { pub acknowledged: bool, pub matchedCount: u64, pub modifiedCount: u64 }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct DeleteAckDoc { pub acknowledged: bool, pub deletedCount: u64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::auth::issue_token,
        crate::routes::auth::logout,
        crate::routes::services::list_services,
        crate::routes::services::get_service,
        crate::routes::bookings::list_bookings,
        crate::routes::bookings::create_booking,
        crate::routes::bookings::update_booking,
        crate::routes::bookings::delete_booking,
    ),
    components(
        schemas(
            HealthResponse,
            IdentityDoc,
            SuccessDoc,
            ServiceDoc,
            ServiceSummaryDoc,
            NewBookingDoc,
            BookingDoc,
            StatusUpdateDoc,
            InsertAckDoc,
            UpdateAckDoc,
            DeleteAckDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "services"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
