use super::*;

use std::time::Duration;

use crossbeam_channel::bounded;

#[test]
fn prediction_result_waits_for_room_in_full_ui_queue() {
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
    ui_tx
        .try_send(UiEvent::Info("busy".to_string()))
        .expect("fill queue");

    let sender = thread::spawn(move || {
        deliver_prediction(
            &ui_tx,
            7,
            Ok(PredictResponse {
                prediction: "Kötü Huylu".to_string(),
                probability: 0.89,
            }),
        );
    });

    assert!(matches!(
        ui_rx.recv_timeout(Duration::from_secs(1)),
        Ok(UiEvent::Info(_))
    ));
    match ui_rx.recv_timeout(Duration::from_secs(1)) {
        Ok(UiEvent::PredictionFinished { ticket, response }) => {
            assert_eq!(ticket, 7);
            assert_eq!(response.expect("ok").probability, 0.89);
        }
        _ => panic!("prediction result was not delivered"),
    }
    sender.join().expect("sender thread");
}

#[test]
fn closed_ui_queue_does_not_block_delivery() {
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
    drop(ui_rx);

    deliver_prediction(
        &ui_tx,
        3,
        Err(NetworkError::Transport("connection refused".to_string())),
    );
}
