use bluetime::{DifferenceEngine, DifferenceMode, DifferenceRequest, LocalInstant, UtcInstant};

fn main() {
    let now = LocalInstant::now();
    println!("now (local): {now}  {} {}", now.day_name(), now.month_name());

    let Ok(launch) = UtcInstant::from_fields(15, 0, 0, 24, 9, 2011) else {
        eprintln!("invalid launch date");
        return;
    };
    let today = UtcInstant::from_epoch(now.epoch_seconds());

    println!("absolute: {}", launch.differences(&today, DifferenceMode::Absolute));
    println!("relative: {}", launch.differences(&today, DifferenceMode::Relative));

    match DifferenceRequest::parse(&launch, &today, Some("fortnights"), false) {
        Ok(request) => println!("{:?}", request.evaluate(&DifferenceEngine::new())),
        Err(err) => println!("{} ({})", err, err.kind()),
    }
}
