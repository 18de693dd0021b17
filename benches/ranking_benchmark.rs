use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, thread_rng, Rng};
use travel_booking_engine::{filter, rank, Catalog, Flight, Hotel, HotelAmenity, SortKey};

const CITIES: [&str; 6] = ["上海", "北京", "三亚", "杭州", "成都", "广州"];

fn random_flights(count: usize) -> Catalog<Flight> {
    let mut rng = thread_rng();
    let flights = (0..count)
        .map(|i| Flight {
            id: i.to_string(),
            airline: "东方航空".to_string(),
            airline_code: "MU".to_string(),
            flight_number: format!("MU{}", 5000 + i),
            departure_time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
            arrival_time: "23:59".to_string(),
            departure_city: CITIES.choose(&mut rng).unwrap().to_string(),
            arrival_city: CITIES.choose(&mut rng).unwrap().to_string(),
            departure_airport: "T1".to_string(),
            arrival_airport: "T2".to_string(),
            duration: format!("{}h{:02}m", rng.gen_range(1..10), rng.gen_range(0..60)),
            price: rng.gen_range(300..3000),
            cabin_class: "经济舱".to_string(),
            stops: 0,
            baggage: "20kg".to_string(),
            meal: rng.gen_bool(0.5),
            seats_left: None,
        })
        .collect();
    Catalog::new(flights).unwrap()
}

fn random_hotels(count: usize) -> Catalog<Hotel> {
    let mut rng = thread_rng();
    let hotels = (0..count)
        .map(|i| Hotel {
            id: i.to_string(),
            name: format!("酒店{}", i),
            location: format!("{}市{}区", CITIES.choose(&mut rng).unwrap(), i % 17),
            rating: rng.gen_range(3.0..5.0),
            reviews: rng.gen_range(0..5000),
            price_per_night: rng.gen_range(200..2000),
            image: String::new(),
            amenities: vec![HotelAmenity::Wifi],
            featured: rng.gen_bool(0.1),
        })
        .collect();
    Catalog::new(hotels).unwrap()
}

pub fn ranking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("flight_ranking");

    for size in [10, 1_000, 10_000].iter() {
        let flights = random_flights(*size);
        for key in SortKey::ALL {
            group.bench_with_input(
                BenchmarkId::new(key.as_str(), size),
                &flights,
                |b, flights| b.iter(|| black_box(rank(flights, key).unwrap())),
            );
        }
    }

    group.finish();
}

pub fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_filter");

    for size in [10, 1_000, 10_000].iter() {
        let hotels = random_hotels(*size);
        for query in ["", "上海", "酒店9"] {
            group.bench_with_input(
                BenchmarkId::new(format!("query={:?}", query), size),
                &hotels,
                |b, hotels| b.iter(|| black_box(filter(hotels, query))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, ranking_benchmark, filter_benchmark);
criterion_main!(benches);
