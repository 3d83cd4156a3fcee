#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use contact_api::{config::Config, routes, state::AppState};
    use leptos::logging;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::compression::CompressionLayer;
    use website::app::*;

    simple_logger::init_with_level(log::Level::Warn).expect("couldn't initialize logging");

    let conf = get_configuration(None).expect("couldn't load leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let contact_config = Config::from_env().expect("couldn't load contact endpoint configuration");
    let contact: Router<LeptosOptions> =
        routes::router().with_state(AppState::new(&contact_config));

    let app = Router::new()
        .merge(contact)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(CompressionLayer::new());

    logging::log!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("couldn't bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function; see lib.rs for the hydrate entry point
}
