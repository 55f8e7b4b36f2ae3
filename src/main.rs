use std::future::Future;
use std::process::ExitCode;

use chrono::{DateTime, Local, NaiveDate, Utc};

use gcalbar_auth::{AuthError, ClientCredentials, GoogleAuth, TokenSet, TokenStore};
use gcalbar_core::{AppError, Config};
use gcalbar_gcal::{CalendarClient, CalendarError, EventSource};
use gcalbar_render::{build_grid, format_events, zip_columns, EventRecord};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Fatal: {err}");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Fatal path: auth/config failures before anything has rendered end the run
/// with a user-facing message. Fetch and formatting failures never get here -
/// they degrade inside `agenda_lines` so the grid still renders.
async fn run() -> Result<(), AppError> {
    gcalbar_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    let credentials = ClientCredentials::load(&config.credentials_path())?;
    let auth = GoogleAuth::new(credentials);
    let store = TokenStore::new(config.token_path());

    let token = access_token(&auth, &store).await?;
    let client = CalendarClient::new(&token);

    let now = Utc::now();
    let today = Local::now().date_naive();

    let fetched = fetch_with_refresh(&client, &config, now, || async {
        refreshed_token(&auth, &store)
            .await
            .map(|fresh| CalendarClient::new(&fresh))
    })
    .await;

    let grid = build_grid(today, config.weeks, config.accent_color);
    let events = agenda_lines(fetched, today, config.accent_color);

    for line in zip_columns(&grid, &events) {
        println!("{line}");
    }

    Ok(())
}

/// Fetch upcoming events, retrying once with a refreshed token when the
/// source rejects the current one. A failed refresh reports the original
/// rejection, not the refresh error.
async fn fetch_with_refresh<S, F, Fut>(
    source: &S,
    config: &Config,
    now: DateTime<Utc>,
    refresh: F,
) -> Result<Vec<EventRecord>, CalendarError>
where
    S: EventSource,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S, AuthError>>,
{
    match source
        .upcoming_events(&config.calendar_id, now, config.max_results)
        .await
    {
        Err(err) if err.should_refresh_token() => {
            tracing::info!("Access token rejected; refreshing and retrying once");
            match refresh().await {
                Ok(fresh) => {
                    fresh
                        .upcoming_events(&config.calendar_id, now, config.max_results)
                        .await
                }
                Err(refresh_err) => {
                    tracing::warn!("Token refresh failed: {refresh_err}");
                    Err(err)
                }
            }
        }
        result => result,
    }
}

/// Format the agenda panel, degrading to a single fallback line so the grid
/// still renders; the cause goes to the log, not the widget.
fn agenda_lines(
    fetched: Result<Vec<EventRecord>, CalendarError>,
    today: NaiveDate,
    accent: u8,
) -> Vec<String> {
    let records = match fetched {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!("Event fetch failed: {err}");
            return vec![err.user_message()];
        }
    };

    match format_events(&records, today, accent) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::warn!("Event formatting failed: {err}");
            vec![err.user_message()]
        }
    }
}

/// Produce a usable access token: stored, refreshed, or freshly authorized.
async fn access_token(auth: &GoogleAuth, store: &TokenStore) -> Result<String, AuthError> {
    obtain_token(auth, store, || authorize_interactively(auth, store)).await
}

/// A refresh that fails (revoked grant, missing refresh token) falls back to
/// the interactive consent flow instead of ending the run.
async fn obtain_token<F, Fut>(
    auth: &GoogleAuth,
    store: &TokenStore,
    interactive: F,
) -> Result<String, AuthError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, AuthError>>,
{
    match store.load() {
        Ok(token) if !token.needs_refresh() => Ok(token.access_token),
        Ok(_) => match refreshed_token(auth, store).await {
            Ok(access) => Ok(access),
            Err(err) => {
                tracing::warn!("Token refresh failed: {err}; starting a fresh sign-in");
                interactive().await
            }
        },
        Err(_) => interactive().await,
    }
}

/// Refresh the stored token and persist the result.
async fn refreshed_token(auth: &GoogleAuth, store: &TokenStore) -> Result<String, AuthError> {
    let token = store.load()?;
    let refresh = token.refresh_token.clone().ok_or(AuthError::TokenExpired)?;

    let response = auth.refresh_token(&refresh).await?;
    let refreshed = TokenSet::from_response(response, token.refresh_token);
    store.store(&refreshed)?;

    Ok(refreshed.access_token)
}

/// Original consent flow: print the URL, read the pasted code from stdin.
async fn authorize_interactively(
    auth: &GoogleAuth,
    store: &TokenStore,
) -> Result<String, AuthError> {
    let (url, _state) = auth.authorization_url();
    eprintln!("Go to the following link in your browser, then paste the authorization code:");
    eprintln!("{url}");

    let mut code = String::new();
    std::io::stdin().read_line(&mut code)?;

    let response = auth.exchange_code(code.trim()).await?;
    let token = TokenSet::from_response(response, None);
    store.store(&token)?;

    Ok(token.access_token)
}
