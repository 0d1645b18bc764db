use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AccountTransformer, AdminProfileRequest, BookingTransformer, ListUsersRequest, LoginRequest,
    ProfileRequest, RegisterAdminRequest, RegisterUserRequest, Session,
};
use crate::response::{AccountPresenter, Acknowledge, BookingPresenter};
use application::service::{AccountService, AdminAccountService, ManageBookingService};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait AccountRouter {
    fn route_account(self) -> Self;
}

impl AccountRouter for Router<AppModule> {
    fn route_account(self) -> Self {
        self.route(
            "/auth/register",
            post(
                |State(module): State<AppModule>, Json(req): Json<RegisterUserRequest>| async move {
                    Controller::new(AccountTransformer, Acknowledge(StatusCode::CREATED))
                        .try_intake(req)?
                        .handle(|dto| async move { module.register(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/auth/login",
            post(
                |State(module): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.login(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/admin/register",
            post(
                |State(module): State<AppModule>, Json(req): Json<RegisterAdminRequest>| async move {
                    Controller::new(AccountTransformer, Acknowledge(StatusCode::CREATED))
                        .try_intake(req)?
                        .handle(|dto| async move { module.register_admin(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/admin/login",
            post(
                |State(module): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.login_admin(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/admin/me",
            get(
                |State(module): State<AppModule>, session: Session| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .intake(session)
                        .handle(|dto| async move { module.current_admin(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 session: Session,
                 Json(req): Json<AdminProfileRequest>| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .try_intake((session, req))?
                        .handle(|dto| async move { module.update_admin(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users",
            get(
                |State(module): State<AppModule>, Query(req): Query<ListUsersRequest>| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.list_users(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/me",
            get(
                |State(module): State<AppModule>, session: Session| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .intake(session)
                        .handle(|dto| async move { module.current_user(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 session: Session,
                 Json(req): Json<ProfileRequest>| async move {
                    Controller::new(AccountTransformer, AccountPresenter)
                        .try_intake((session, req))?
                        .handle(|dto| async move { module.update_profile(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, session: Session| async move {
                    Controller::new(AccountTransformer, Acknowledge(StatusCode::NO_CONTENT))
                        .intake(session)
                        .handle(|dto| async move { module.delete_account(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/me/bookings",
            get(
                |State(module): State<AppModule>, session: Session| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(session)
                        .handle(|dto| async move { module.my_bookings(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
