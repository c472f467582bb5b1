use mockito::Matcher;
use tourla_bot::format;
use tourla_bot::{Assistant, PlacesService, Responder, WeatherService};
use tourla_llm::{ClientFactory, ProviderConfig};

#[tokio::test]
async fn test_weather_reply_uses_current_conditions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Bogota,CO".into()),
            Matcher::UrlEncoded("appid".into(), "w-key".into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
            Matcher::UrlEncoded("lang".into(), "es".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "Bogotá", "main": {"temp": 17.3}, "weather": [{"description": "lluvia ligera", "icon": "10d"}]}"#)
        .create_async()
        .await;

    let responder = Responder::builder()
        .weather(WeatherService::new(Some("w-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("¿Va a haber lluvia hoy?", &[]).await;

    mock.assert_async().await;
    assert_eq!(reply.content, "El clima actual en Bogotá: 17°C, lluvia ligera.");
    assert_eq!(
        reply.metadata.image.as_deref(),
        Some("https://openweathermap.org/img/wn/10d@2x.png")
    );
}

#[tokio::test]
async fn test_weather_for_a_named_locality_uses_its_city() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::UrlEncoded("q".into(), "Chia,CO".into()))
        .with_status(200)
        .with_body(r#"{"main": {"temp": 12.0}, "weather": [{"description": "Nubes", "icon": "04n"}]}"#)
        .create_async()
        .await;

    let responder = Responder::builder()
        .weather(WeatherService::new(Some("w-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("clima en chía", &[]).await;

    mock.assert_async().await;
    assert_eq!(reply.content, "El clima actual en Chía: 12°C, nubes.");
}

#[tokio::test]
async fn test_weather_failure_becomes_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let responder = Responder::builder()
        .weather(WeatherService::new(Some("w-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("temperatura", &[]).await;
    assert_eq!(reply.content, format::WEATHER_FAILED);
}

#[tokio::test]
async fn test_restaurant_search_with_places_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/maps/api/place/textsearch/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "restaurantes en Chapinero Bogotá".into()),
            Matcher::UrlEncoded("location".into(), "4.6486,-74.0628".into()),
            Matcher::UrlEncoded("radius".into(), "5000".into()),
            Matcher::UrlEncoded("key".into(), "maps-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": "OK",
                "results": [
                    {"name": "El Chato", "formatted_address": "Calle 65 #4-76", "rating": 4.7,
                     "geometry": {"location": {"lat": 4.65, "lng": -74.06}},
                     "photos": [{"photo_reference": "ref1"}]},
                    {"name": "Harry Sasson", "formatted_address": "Carrera 9 #75-70",
                     "geometry": {"location": {"lat": 4.66, "lng": -74.05}}}
                ]
            }"#,
        )
        .create_async()
        .await;

    let responder = Responder::builder()
        .places(PlacesService::new(Some("maps-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("Restaurantes en Chapinero", &[]).await;

    mock.assert_async().await;
    assert!(reply.content.starts_with("Encontré estos restaurantes en Chapinero:"));
    assert!(reply.content.contains("1. **El Chato**: Calle 65 #4-76 (⭐ 4.7)"));
    assert!(reply.content.contains("2. **Harry Sasson**: Carrera 9 #75-70\n"));

    let map = reply.metadata.map.unwrap();
    assert!(map.starts_with("https://maps.googleapis.com/maps/api/staticmap?center=4.6486,-74.0628&zoom=14&size=400x300"));
    assert!(map.contains("markers=color:red%7Clabel:1%7C4.65,-74.06"));
    assert!(map.contains("markers=color:red%7Clabel:2%7C4.66,-74.05"));
    assert!(map.ends_with("&key=maps-key"));

    let image = reply.metadata.image.unwrap();
    assert!(image.contains("photoreference=ref1"));
    assert_eq!(reply.metadata.location, None);
}

#[tokio::test]
async fn test_single_place_sets_location() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maps/api/place/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "results": [{"name": "Centro Comercial Santafé", "formatted_address": "Calle 185 #45-03"}]}"#)
        .create_async()
        .await;

    let responder = Responder::builder()
        .places(PlacesService::new(Some("maps-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("centro comercial en suba", &[]).await;

    let location = reply.metadata.location.unwrap();
    assert_eq!(location.name, "Centro Comercial Santafé");
    assert_eq!(location.address, "Calle 185 #45-03");
    // No coordinates, but the map still centers on the locality.
    assert!(reply.metadata.map.unwrap().contains("center=4.741,-74.084"));
}

#[tokio::test]
async fn test_places_zero_results_is_no_data() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maps/api/place/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "ZERO_RESULTS", "results": []}"#)
        .create_async()
        .await;

    let responder = Responder::builder()
        .places(PlacesService::new(Some("maps-key".into())).with_base_url(server.url()))
        .build();
    let reply = responder.respond("centro comercial en sumapaz", &[]).await;
    assert_eq!(
        reply.content,
        "Lo siento, no tengo información de centros comerciales para Sumapaz en mi base de datos."
    );
}

#[tokio::test]
async fn test_places_denied_becomes_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/maps/api/place/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#)
        .create_async()
        .await;

    let places = PlacesService::new(Some("maps-key".into())).with_base_url(server.url());
    let suba = tourla_bot::catalog::locality("suba").unwrap();
    let err = places.search("centros comerciales", suba).await.unwrap_err();
    assert!(err.to_string().contains("REQUEST_DENIED"));

    let responder = Responder::builder().places(places).build();
    let reply = responder.respond("centro comercial en suba", &[]).await;
    assert_eq!(reply.content, format::PLACES_FAILED);
}

#[tokio::test]
async fn test_unrecognized_input_goes_to_assistant() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJsonString(
            r#"{"model": "gpt-3.5-turbo"}"#.into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "Prueba el ajiaco santafereño."}, "finish_reason": "stop"}]}"#)
        .create_async()
        .await;

    let client = ClientFactory::create_chat_client(ProviderConfig::openai("o-key").with_base_url(server.url())).unwrap();
    let responder = Responder::builder()
        .assistant(Assistant::new(client, "gpt-3.5-turbo"))
        .build();
    let reply = responder.respond("¿Qué plato típico me recomiendas?", &[]).await;

    mock.assert_async().await;
    assert_eq!(reply.content, "Prueba el ajiaco santafereño.");
}

#[tokio::test]
async fn test_assistant_failure_becomes_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .create_async()
        .await;

    let client = ClientFactory::create_chat_client(ProviderConfig::openai("o-key").with_base_url(server.url())).unwrap();
    let responder = Responder::builder()
        .assistant(Assistant::new(client, "gpt-3.5-turbo"))
        .build();
    let reply = responder.respond("xyz", &[]).await;
    assert_eq!(reply.content, format::ASSISTANT_FAILED);
}
