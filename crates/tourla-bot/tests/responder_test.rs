use tourla_bot::format;
use tourla_bot::{catalog, BotReply, Responder, Topic};
use tourla_persist::{ChatSession, InMemoryPersistenceClient, NewMessage, PersistenceClient};

/// One request cycle: read history, store the user message, reply, store the reply
async fn turn(
    store: &InMemoryPersistenceClient,
    responder: &Responder,
    session: &ChatSession,
    text: &str,
) -> BotReply {
    let history = store.get_messages(&session.id).await.unwrap();
    store
        .save_message(NewMessage::user(&session.id, &session.user_id, text))
        .await
        .unwrap();
    let reply = responder.respond(text, &history).await;
    store
        .save_message(reply.clone().into_message(&session.id, &session.user_id))
        .await
        .unwrap();
    reply
}

#[tokio::test]
async fn test_tourism_in_chapinero_lists_spots() {
    let reply = Responder::default().respond("turismo en chapinero", &[]).await;
    assert!(reply
        .content
        .starts_with("¡Claro! Según mi base de datos, aquí tienes algunos lugares recomendados en Chapinero:"));
    assert!(reply.content.contains("1. **Parque de la 93**"));
}

#[tokio::test]
async fn test_clarification_then_locality_answers_the_pending_topic() {
    let store = InMemoryPersistenceClient::new();
    let responder = Responder::default();
    let session = store.create_session("ana").await.unwrap();

    let first = turn(&store, &responder, &session, "turismo").await;
    assert_eq!(
        first.content,
        "¡Claro! ¿En qué localidad o barrio de Bogotá te gustaría conocer lugares turísticos?"
    );

    let second = turn(&store, &responder, &session, "La Candelaria").await;
    assert!(second.content.contains("1. **Monserrate**"));
    assert!(second.content.contains("2. **Museo del Oro**"));
    assert_eq!(second.metadata.awaiting, None);
}

#[tokio::test]
async fn test_pending_topic_is_not_tourism_by_default() {
    let store = InMemoryPersistenceClient::new();
    let responder = Responder::default();
    let session = store.create_session("ana").await.unwrap();

    let first = turn(&store, &responder, &session, "¿Qué tan seguro es?").await;
    assert_eq!(first.content, format::clarify(Topic::Safety));

    let second = turn(&store, &responder, &session, "la candelaria").await;
    assert!(second.content.starts_with("Recomendaciones de seguridad para La Candelaria:"));
}

#[tokio::test]
async fn test_clarification_is_consumed_after_one_turn() {
    let store = InMemoryPersistenceClient::new();
    let responder = Responder::default();
    let session = store.create_session("ana").await.unwrap();

    turn(&store, &responder, &session, "restaurantes").await;
    turn(&store, &responder, &session, "chapinero").await;
    // The pending restaurant question was answered; a bare locality now means tourism.
    let third = turn(&store, &responder, &session, "usaquen").await;
    assert!(third.content.contains("Mercado de las Pulgas de Usaquén"));
}

#[tokio::test]
async fn test_locality_without_entries_says_no_data() {
    let reply = Responder::default().respond("turismo en Chía", &[]).await;
    assert_eq!(
        reply.content,
        "Lo siento, no tengo información de lugares turísticos para Chía en mi base de datos."
    );

    let reply = Responder::default().respond("seguridad en sumapaz", &[]).await;
    assert_eq!(reply.content, format::no_data(Topic::Safety, catalog::locality("sumapaz").unwrap()));

    let reply = Responder::default().respond("restaurantes en Bosa", &[]).await;
    assert!(reply.content.starts_with("Lo siento, no tengo información de restaurantes para Bosa"));
}

#[tokio::test]
async fn test_every_locality_answers_without_panicking() {
    let responder = Responder::default();
    for locality in catalog::LOCALITIES {
        let reply = responder.respond(locality.name, &[]).await;
        assert!(!reply.content.is_empty(), "{}", locality.key);
        assert!(reply.content.contains(locality.name), "{}", locality.key);
    }
}

#[tokio::test]
async fn test_degraded_modes_without_keys() {
    let responder = Responder::default();

    let mall = responder.respond("centro comercial en suba", &[]).await;
    assert_eq!(mall.content, format::MAPS_NOT_CONFIGURED);

    let weather = responder.respond("¿Cómo está el clima?", &[]).await;
    assert_eq!(weather.content, format::WEATHER_NOT_CONFIGURED);

    let unknown = responder.respond("asdf qwerty", &[]).await;
    assert_eq!(unknown.content, format::FALLBACK);
}

#[tokio::test]
async fn test_small_talk_replies() {
    let responder = Responder::default();
    assert_eq!(
        responder.respond("gracias!", &[]).await.content,
        "¡De nada! Si necesitas más recomendaciones, no dudes en preguntar."
    );
    assert_eq!(
        responder.respond("Adiós", &[]).await.content,
        "¡Que tengas un gran día explorando Bogotá!"
    );
}
