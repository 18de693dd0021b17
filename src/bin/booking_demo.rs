use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use travel_booking_engine::logging;
use travel_booking_engine::steps::format_date;
use travel_booking_engine::{
    seed, Bookable, EngineConfig, FlightSearchStep, FlightSelectionStep, HotelListStep,
    RecordingNavigator, RoomSelectionStep, SelectionSummary, Step,
};

#[derive(Parser)]
#[command(name = "booking-demo")]
#[command(about = "Walk the sample booking flow from flight search to room selection")]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Flight sort tab: price, time or duration
    #[arg(short, long)]
    sort: Option<String>,

    /// Flight id to select
    #[arg(long, default_value = "1")]
    flight: String,

    /// Hotel search text
    #[arg(short, long, default_value = "")]
    query: String,

    /// Hotel id to open
    #[arg(long, default_value = "1")]
    hotel: String,

    /// Room id to select
    #[arg(long, default_value = "1")]
    room: String,

    /// Number of travelers
    #[arg(short, long, default_value_t = 1)]
    travelers: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_summary(heading: &str, summary: Option<SelectionSummary>) {
    if let Some(summary) = summary {
        println!("  {}: {}  ¥{}", heading, summary.label, summary.price);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => EngineConfig::default(),
    };

    let mut navigator = RecordingNavigator::new();

    // Step 1
    let mut search = FlightSearchStep::new(&config);
    search.set_origin("上海");
    search.set_destination("北京");
    search.set_departure_date(NaiveDate::from_ymd_opt(2024, 3, 15));
    search.set_travelers(args.travelers);
    let (query, _) = search.submit(&mut navigator);
    println!("[{}]", Step::FlightSearch.title());
    println!(
        "  {} → {} · {} · {} 位成人",
        query.origin,
        query.destination,
        query
            .departure_date
            .map(format_date)
            .unwrap_or_else(|| "选择出发日期".to_string()),
        query.travelers
    );

    // Step 2
    let mut flights = FlightSelectionStep::new(seed::flights()?, &config);
    if let Some(sort) = &args.sort {
        flights.set_sort_key(sort)?;
    }
    println!(
        "[{}] {}",
        Step::FlightSelection.title(),
        flights.sort_key().label()
    );
    for flight in flights.view()? {
        let badge = flights
            .seats_warning(&flight)
            .map(|n| format!("  仅剩{}座", n))
            .unwrap_or_default();
        println!(
            "  {} {} {}-{} {} ¥{}{}",
            flight.id(),
            flight.flight_number,
            flight.departure_time,
            flight.arrival_time,
            flight.duration,
            flight.price,
            badge
        );
    }
    flights.select(&args.flight)?;
    print_summary("已选航班", flights.summary());
    flights.advance(&mut navigator)?;

    // Step 3
    let mut hotels = HotelListStep::new(seed::hotels()?);
    hotels.set_query(args.query.clone());
    println!(
        "[{}] 找到 {} 家酒店",
        Step::HotelList.title(),
        hotels.result_count()
    );
    for hotel in hotels.view() {
        println!(
            "  {} {} · {} · {} ¥{}/晚起",
            hotel.id, hotel.name, hotel.location, hotel.rating, hotel.price_per_night
        );
    }
    let opened = hotels.open_hotel(&args.hotel, &mut navigator)?;

    // Step 4
    let mut rooms = RoomSelectionStep::from_transition(seed::rooms()?, &opened);
    println!(
        "[{}] {} · 共 {} 种房型",
        Step::RoomSelection.title(),
        rooms.route(),
        rooms.room_count()
    );
    for room in rooms.view() {
        println!(
            "  {} {} {}m² {} ¥{}",
            room.id, room.name, room.size_m2, room.bed_type, room.price_per_night
        );
    }
    rooms.select(&args.room)?;
    print_summary("已选择房型", rooms.summary());
    rooms.advance(&mut navigator)?;

    println!("transitions:");
    for transition in navigator.transitions() {
        println!(
            "  {} -> {} ({})",
            transition.from,
            transition
                .to
                .map(|step| step.to_string())
                .unwrap_or_else(|| "confirmation".to_string()),
            transition.payload.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
