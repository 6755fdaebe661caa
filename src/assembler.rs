//! Trip document assembly
//!
//! Orders the synthesized itinerary, the budget breakdown, and the
//! advisory sections (lodging, transport, dining, packing, local tips,
//! emergency contacts) into one `TripDocument`. Every sub-section
//! degrades to a generic variant when destination- or interest-specific
//! content is unavailable; the finished document is never incomplete
//! because enrichment data is missing.

use crate::budget::BudgetBreakdown;
use crate::models::{
    Interest, ItineraryDay, Section, Table, TransportMode, TravelData, TripDocument, TripRequest,
};
use crate::prices::format_rupees;

/// Seasonal packing advice for a travel month
struct SeasonInfo {
    name: &'static str,
    clothing_advice: &'static str,
    weather_gear: &'static str,
}

/// Assemble the complete document in fixed section order
#[must_use]
pub fn assemble(
    request: &TripRequest,
    travel_data: &TravelData,
    itinerary: &[ItineraryDay],
    budget: &BudgetBreakdown,
    narrative: Option<&str>,
) -> TripDocument {
    let sections = vec![
        overview_section(request, travel_data, narrative),
        itinerary_section(itinerary),
        budget_section(request, budget),
        lodging_section(request, travel_data),
        transport_section(request, travel_data),
        dining_section(request),
        packing_section(request),
        local_tips_section(request),
        emergency_section(request),
        closing_section(request),
    ];

    TripDocument {
        title: format!("Trip Plan to {}", request.destination),
        subtitle_lines: vec![
            format!("For: {}", request.name),
            format!(
                "Dates: {} to {}",
                request.departure_date.format("%Y-%m-%d"),
                request.return_date.format("%Y-%m-%d")
            ),
            "Personalized Itinerary".to_string(),
        ],
        sections,
    }
}

fn overview_section(
    request: &TripRequest,
    travel_data: &TravelData,
    narrative: Option<&str>,
) -> Section {
    let mut section = Section::new("Trip Overview");

    let interests = if request.interests.is_empty() {
        "sightseeing".to_string()
    } else {
        request
            .interests
            .iter()
            .take(3)
            .map(|i| i.label().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let modes = request
        .transport_modes
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ");

    section.paragraph(format!(
        "This {}-day {} trip to {} is designed for {} travelers with a total budget of {}.",
        request.duration_days(),
        request.trip_type.label().to_lowercase(),
        request.destination,
        request.travelers,
        format_rupees(request.total_budget as i64),
    ));
    section.paragraph(format!(
        "The itinerary focuses on {interests} with a {}-paced schedule, featuring {} dining \
         options and {modes} transportation.",
        request.pace.label().to_lowercase(),
        request.dietary.label().to_lowercase(),
    ));

    // Enrichment: encyclopedic context when the lookup succeeded
    if let Some(summary) = &travel_data.destination_summary {
        if !summary.extract.is_empty() {
            section.paragraph(format!("About {}: {}", summary.title, summary.extract));
        }
    }
    if let Some(text) = narrative {
        section.paragraph(text.to_string());
    }

    section
}

fn itinerary_section(itinerary: &[ItineraryDay]) -> Section {
    let mut section = Section::new("Day-by-Day Itinerary");

    for day in itinerary {
        let mut items: Vec<String> = day
            .activities
            .iter()
            .map(|activity| format!("{}: {}", activity.period.label(), activity.description))
            .collect();
        if let Some(group_cost) = day.group_cost {
            items.push(format!(
                "Estimated daily cost for group: {}",
                format_rupees(i64::from(group_cost))
            ));
        }
        section.bullets(
            format!(
                "Day {} - {} - {}",
                day.index,
                day.date.format("%Y-%m-%d"),
                day.theme
            ),
            items,
        );
    }

    section
}

fn budget_section(request: &TripRequest, budget: &BudgetBreakdown) -> Section {
    let mut section = Section::new("Budget Breakdown");

    let modes = request
        .transport_modes
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ");
    let details = |category: &str| -> String {
        match category {
            "Transportation" => format!("{modes} + local transport"),
            "Accommodation" => format!("Hotels for {} nights", request.duration_days()),
            "Food & Dining" => format!("{} cuisine preferences", request.dietary.label()),
            "Activities" => "Sightseeing and experiences".to_string(),
            _ => "Shopping and emergency fund".to_string(),
        }
    };

    let rows = budget
        .entries()
        .iter()
        .map(|(category, amount)| {
            vec![
                (*category).to_string(),
                format_rupees(*amount),
                details(category),
            ]
        })
        .collect();

    section.table(Table {
        headers: vec![
            "Category".to_string(),
            "Allocated Budget".to_string(),
            "Details".to_string(),
        ],
        rows,
        footer: Some(vec![
            "TOTAL BUDGET".to_string(),
            format_rupees(budget.total as i64),
            "Complete trip allocation".to_string(),
        ]),
    });

    section
}

fn lodging_section(request: &TripRequest, travel_data: &TravelData) -> Section {
    let mut section = Section::new("Where to Stay");
    let destination = &request.destination;
    let trip_type = request.trip_type.label().to_lowercase();

    section.bullets(
        "Budget Hotels (Rs. 1,500-3,000/night)",
        vec![
            format!(
                "Hotel Orchid {destination} - Clean rooms, 24-hour front desk, restaurant, WiFi \
                 (Rs. 2,500/night)"
            ),
            format!(
                "Backpacker Hostel - Shared facilities, common area, perfect for {trip_type} \
                 groups (Rs. 1,500/night)"
            ),
            "Tourist Guest House - Basic amenities, central location, budget-friendly \
             (Rs. 2,000/night)"
                .to_string(),
        ],
    );
    section.bullets(
        "Mid-range Hotels (Rs. 3,000-6,000/night)",
        vec![
            "Hotel Metropolitan - 4-star comfort, gym, spa, multiple restaurants (Rs. 4,500/night)"
                .to_string(),
            "Boutique Heritage Hotel - Local architecture, modern amenities, rooftop dining \
             (Rs. 5,000/night)"
                .to_string(),
            "Business Hotel Express - Perfect for comfort, conference rooms, executive services \
             (Rs. 3,800/night)"
                .to_string(),
        ],
    );
    section.bullets(
        "Premium Hotels (Rs. 6,000+/night)",
        vec![
            "The Grand Palace Hotel - 5-star luxury, full-service spa, fine dining, concierge \
             (Rs. 8,500/night)"
                .to_string(),
            "Heritage Mansion - Historic property, unique architecture, premium hospitality \
             (Rs. 7,200/night)"
                .to_string(),
            "Luxury Resort & Spa - Complete resort experience, recreational facilities, premium \
             service (Rs. 9,000/night)"
                .to_string(),
        ],
    );

    if let Some(snapshot) = &travel_data.accommodation {
        section.paragraph(format!(
            "Observed market price range: {}",
            snapshot.price_range
        ));
    }

    section
}

fn transport_section(request: &TripRequest, travel_data: &TravelData) -> Section {
    let mut section = Section::new("Transportation Guide");
    let from = &request.departure_city;
    let to = &request.destination;

    // Only the modes the traveler selected are described
    let main_options: Vec<String> = request
        .transport_modes
        .iter()
        .map(|mode| match mode {
            TransportMode::Flight => {
                format!("{from} to {to} by air - fastest option, 2-3 hours journey time")
            }
            TransportMode::Train => {
                format!("{from} to {to} by train - comfortable, scenic journey, 8-12 hours")
            }
            TransportMode::Bus => {
                format!("{from} to {to} by bus - economical option, overnight journey")
            }
            TransportMode::CarRental => {
                format!("{from} to {to} by car - flexible timing, road trip experience")
            }
        })
        .collect();
    section.bullets("Main Travel Options", main_options);

    section.bullets(
        "Local Transportation",
        vec![
            format!("Metro system - efficient and economical city travel in {to}"),
            "Taxi and ride-sharing - convenient door-to-door service, app-based booking"
                .to_string(),
            "Auto-rickshaws - local experience, good for short distances".to_string(),
            "Local buses - budget-friendly option for city exploration".to_string(),
        ],
    );

    if let Some(snapshot) = &travel_data.transport {
        section.paragraph(format!(
            "Observed route price range: {}",
            snapshot.price_range
        ));
    }

    section
}

fn dining_section(request: &TripRequest) -> Section {
    use crate::models::DietaryPreference;

    let mut section = Section::new("Food & Dining");
    let destination = &request.destination;

    let dishes: Vec<String> = if destination.trim().eq_ignore_ascii_case("delhi") {
        match request.dietary {
            DietaryPreference::NonVegetarian => vec![
                "Butter Chicken at Moti Mahal - birthplace of this famous dish (Rs. 400 per plate)"
                    .to_string(),
                "Kebabs at Karim's - legendary Jama Masjid restaurant, 100+ years old \
                 (Rs. 300-500 per plate)"
                    .to_string(),
                "Nihari at Al Jawahar - slow-cooked mutton stew, Old Delhi specialty \
                 (Rs. 350 per plate)"
                    .to_string(),
                "Biryani at Biryani Blues - aromatic rice with meat, modern presentation \
                 (Rs. 450 per plate)"
                    .to_string(),
            ],
            DietaryPreference::Vegetarian => vec![
                "Chole Bhature at Sita Ram Diwan Chand - iconic Delhi breakfast \
                 (Rs. 100 per plate)"
                    .to_string(),
                "Parathas at Paranthe Wali Gali - stuffed bread varieties, century-old tradition \
                 (Rs. 80-120 per paratha)"
                    .to_string(),
                "Daulat Ki Chaat - winter delicacy, milk foam sweet (Rs. 50 per bowl)".to_string(),
                "Rajma Chawal at local dhabas - kidney beans with rice, comfort food \
                 (Rs. 150 per plate)"
                    .to_string(),
            ],
            _ => vec![
                "Street Food Tour - gol gappa, aloo tikki, raj kachori (Rs. 200-300 total)"
                    .to_string(),
                "Traditional Thali - complete meal with variety of dishes \
                 (Rs. 300-500 per thali)"
                    .to_string(),
                "Local Sweets - gulab jamun, jalebi, kulfi (Rs. 50-100 per item)".to_string(),
                "Lassi and Chaas - traditional drinks, perfect with meals (Rs. 50-80 per glass)"
                    .to_string(),
            ],
        }
    } else {
        vec![
            format!(
                "Local specialty dishes of {destination} - regional flavors and traditional \
                 preparations"
            ),
            "Street food specialties - popular local snacks and quick bites".to_string(),
            "Traditional restaurants - authentic regional cuisine and family recipes".to_string(),
            "Modern interpretations - contemporary takes on classic dishes".to_string(),
        ]
    };
    section.bullets(format!("Must-Try {destination} Specialties"), dishes);

    section.bullets(
        "Restaurant Recommendations by Budget",
        vec![
            "Budget Dining (Rs. 200-500/meal) - Local dhabas, street food joints, casual eateries"
                .to_string(),
            "Mid-range Dining (Rs. 500-1500/meal) - Popular restaurants, cafe chains, themed \
             restaurants"
                .to_string(),
            "Fine Dining (Rs. 1500+/meal) - Premium restaurants, hotel dining, specialty cuisine \
             restaurants"
                .to_string(),
            "Food Courts & Quick Bites (Rs. 150-400/meal) - Mall food courts, fast food, snack \
             counters"
                .to_string(),
        ],
    );

    section
}

fn packing_section(request: &TripRequest) -> Section {
    use chrono::Datelike;

    let mut section = Section::new("Packing Essentials");
    let destination = &request.destination;
    let duration = request.duration_days();
    let season = season_info(request.departure_date.month(), destination);

    section.bullets(
        "Essential Documents & Money",
        vec![
            "Valid photo ID (Aadhar Card, Passport, Driving License) - keep both original and \
             copies"
                .to_string(),
            "Train/flight tickets and hotel booking confirmations - digital and printed copies"
                .to_string(),
            "Travel insurance documents and emergency contact details".to_string(),
            "Medical prescriptions and health certificates if required".to_string(),
            "Cash in small denominations (Rs. 5,000-10,000) + ATM/credit cards".to_string(),
            "Digital copies of all documents stored in cloud storage".to_string(),
        ],
    );

    section.bullets(
        format!("Clothing for {} in {destination}", season.name),
        vec![
            "Comfortable walking shoes (2 pairs) - broken-in sneakers and formal shoes"
                .to_string(),
            format!("Weather-appropriate clothing - {}", season.clothing_advice),
            format!("Undergarments for {} days - pack extra for comfort", duration + 2),
            "Sleepwear and comfortable lounging clothes".to_string(),
            "One formal outfit for fine dining or cultural events".to_string(),
            format!("Weather protection - {}", season.weather_gear),
        ],
    );

    let mut electronics = vec![
        "Smartphone with offline maps downloaded".to_string(),
        "Power bank (10,000-20,000 mAh) and charging cables".to_string(),
        "Universal power adapter and portable charger".to_string(),
        "Camera with extra memory cards and batteries".to_string(),
        "Earphones/headphones for travel entertainment".to_string(),
        "Portable WiFi hotspot or local SIM card information".to_string(),
    ];
    if request.has_interest(Interest::Photography) {
        electronics.extend([
            "DSLR/mirrorless camera with multiple lenses".to_string(),
            "Compact travel tripod".to_string(),
            "Camera cleaning kit and lens filters".to_string(),
        ]);
    }
    if request.has_interest(Interest::Adventure) {
        electronics.extend([
            "Action camera with mounts and accessories".to_string(),
            "GPS device or GPS watch for trekking".to_string(),
        ]);
    }
    section.bullets("Electronics & Gadgets", electronics);

    section.bullets(
        "Health & Personal Care",
        vec![
            "Basic first-aid kit - band-aids, antiseptic, pain relievers".to_string(),
            "Personal medications with extra supply".to_string(),
            "Hand sanitizer and wet wipes".to_string(),
            "Sunscreen (SPF 30+) and after-sun lotion".to_string(),
            "Insect repellent (especially for outdoor activities)".to_string(),
            "Personal toiletries in travel-size containers".to_string(),
            "Oral rehydration salts (ORS) and digestive aids".to_string(),
        ],
    );

    let mut interest_items = Vec::new();
    if request.has_interest(Interest::Adventure) {
        interest_items.extend([
            "Trekking shoes and hiking socks".to_string(),
            "Quick-dry adventure clothing and cargo pants".to_string(),
            "Waterproof backpack and dry bags".to_string(),
            "Water bottles and energy bars".to_string(),
        ]);
    }
    if request.has_interest(Interest::Culture) {
        interest_items.extend([
            "Modest clothing for religious sites (covered shoulders/legs)".to_string(),
            "Comfortable shoes for walking in museums".to_string(),
            "Notebook for cultural observations".to_string(),
        ]);
    }
    if request.has_interest(Interest::Food) {
        interest_items.extend([
            "Digestive tablets and probiotics".to_string(),
            "Food diary or camera for food photography".to_string(),
            "Reusable water bottle for food tours".to_string(),
        ]);
    }
    if request.has_interest(Interest::Shopping) {
        interest_items.extend([
            "Extra luggage space or foldable duffel bag".to_string(),
            "Calculator for currency conversion".to_string(),
            "Measuring tape for clothing purchases".to_string(),
        ]);
    }
    if request.has_interest(Interest::Nature) {
        interest_items.extend([
            "Binoculars for bird watching".to_string(),
            "Field notebook for nature observations".to_string(),
            "Portable outdoor seating".to_string(),
        ]);
    }
    if !interest_items.is_empty() {
        section.bullets("Special Items for Your Interests", interest_items);
    }

    section.bullets(
        "Miscellaneous Essentials",
        vec![
            "Reusable water bottle and snacks for travel".to_string(),
            "Travel pillow and eye mask for comfortable journey".to_string(),
            "Laundry bag and travel-size detergent".to_string(),
            "Travel locks for luggage security".to_string(),
            "Emergency whistle and flashlight".to_string(),
            format!("Local guidebook or phrasebook for {destination}"),
        ],
    );

    section
}

/// Seasonal packing advice keyed by travel month. Delhi carries detailed
/// month buckets; every other destination gets one generic entry.
fn season_info(month: u32, destination: &str) -> SeasonInfo {
    if destination.trim().eq_ignore_ascii_case("delhi") {
        return match month {
            12 | 1 | 2 => SeasonInfo {
                name: "Winter",
                clothing_advice: "warm layers, sweaters, jacket, long pants, warm socks",
                weather_gear: "light jacket, scarf, and gloves for evening",
            },
            3..=5 => SeasonInfo {
                name: "Hot Season",
                clothing_advice: "light cotton clothing, breathable fabrics, shorts, t-shirts",
                weather_gear: "wide-brimmed hat, sunglasses, and light scarf",
            },
            6..=9 => SeasonInfo {
                name: "Monsoon Season",
                clothing_advice: "quick-dry clothes, light rain jacket, waterproof shoes",
                weather_gear: "umbrella, waterproof bag covers, and rain poncho",
            },
            _ => SeasonInfo {
                name: "Pleasant Weather",
                clothing_advice: "comfortable cotton clothes, light layers for evening",
                weather_gear: "light sweater for evening and early morning",
            },
        };
    }

    SeasonInfo {
        name: "General Season",
        clothing_advice: "comfortable clothing suitable for the local climate",
        weather_gear: "umbrella and light jacket for weather changes",
    }
}

fn local_tips_section(request: &TripRequest) -> Section {
    let mut section = Section::new("Local Tips & Cultural Guidelines");
    let destination = &request.destination;
    let known = destination.trim().eq_ignore_ascii_case("delhi");

    let cultural: Vec<String> = if known {
        vec![
            "Remove shoes when entering temples, gurdwaras, and some traditional homes"
                .to_string(),
            "Dress modestly at religious sites - cover shoulders, arms, and legs".to_string(),
            "Use the Namaste greeting with palms together - respectful and appreciated"
                .to_string(),
            "Avoid pointing feet toward people or religious objects".to_string(),
            "Use right hand for eating, greeting, and giving/receiving items".to_string(),
            "Photography may be restricted in some religious and government buildings"
                .to_string(),
            "Respect local customs during festivals and religious ceremonies".to_string(),
        ]
    } else {
        vec![
            format!("Research {destination} cultural customs and local etiquette before arrival"),
            "Dress appropriately according to local customs and religious sites".to_string(),
            "Learn basic local greetings and common phrases".to_string(),
            "Respect religious and cultural practices".to_string(),
            "Be mindful of photography restrictions at cultural sites".to_string(),
            "Follow local dining etiquette and customs".to_string(),
        ]
    };
    section.bullets("Cultural Etiquette & Customs", cultural);

    section.bullets(
        "Money Matters & Bargaining",
        vec![
            "Carry small denominations (Rs. 10, 20, 50, 100) for street vendors and \
             auto-rickshaws"
                .to_string(),
            "Bargaining is expected at local markets - start at 30-40% of quoted price"
                .to_string(),
            "Fixed price shops and malls don't allow bargaining - prices are set".to_string(),
            "Keep money in multiple places - wallet, bag, and hidden pocket".to_string(),
            "ATMs are widely available - use bank ATMs for better security".to_string(),
            "Digital payments are widely accepted in cities".to_string(),
            "Tipping: 10% at restaurants, Rs. 20-50 for hotel staff, Rs. 10-20 for taxi drivers"
                .to_string(),
        ],
    );

    let transport_tips: Vec<String> = if known {
        vec![
            "Delhi Metro is the fastest way to travel - buy a metro card for convenience"
                .to_string(),
            "Use app-based cabs for comfortable rides - safer than negotiating with taxi drivers"
                .to_string(),
            "Auto-rickshaws should use the meter - insist on it or agree on fare beforehand"
                .to_string(),
            "Avoid rush hours (8-10 AM, 6-8 PM) for smoother travel".to_string(),
            "Download offline maps - Delhi traffic can be unpredictable".to_string(),
            "Bus routes are extensive but can be crowded - metro is more comfortable"
                .to_string(),
        ]
    } else {
        vec![
            format!("Research {destination} public transportation options before arrival"),
            "Use ride-sharing apps for safe and convenient travel".to_string(),
            "Negotiate taxi fares in advance or insist on using the meter".to_string(),
            "Download offline maps and transportation apps".to_string(),
            "Keep local transportation schedules and routes handy".to_string(),
            "Allow extra time for travel during peak hours".to_string(),
        ]
    };
    section.bullets("Getting Around Like a Local", transport_tips);

    section.bullets(
        "Food & Water Safety",
        vec![
            "Drink bottled water or properly boiled water - avoid tap water".to_string(),
            "Eat at busy restaurants with high turnover - fresher food".to_string(),
            "Avoid raw salads and unpeeled fruits from street vendors".to_string(),
            "Street food is generally safe at popular, crowded stalls".to_string(),
            "Carry ORS packets and basic stomach medications".to_string(),
            "Wash hands frequently or use hand sanitizer before eating".to_string(),
            "Start with milder spices and gradually try spicier food".to_string(),
        ],
    );

    section.bullets(
        "Safety & Security Guidelines",
        vec![
            "Keep copies of important documents separate from originals".to_string(),
            "Avoid displaying expensive jewelry, cameras, or large amounts of cash".to_string(),
            "Stay in groups, especially in crowded markets and tourist areas".to_string(),
            "Be cautious of overly friendly strangers offering help or deals".to_string(),
            "Keep hotel address and contact number written down in local language".to_string(),
            "Trust your instincts - if something feels wrong, remove yourself from the situation"
                .to_string(),
            "Use hotel safes for valuable items and important documents".to_string(),
            "Keep emergency numbers saved in your phone and written down".to_string(),
        ],
    );

    section.bullets(
        "Communication & Language",
        vec![
            "English is widely spoken in tourist areas and hotels".to_string(),
            "Learn basic local phrases: \"Thank you\" (Dhanyawad), \"How much?\" (Kitna?)"
                .to_string(),
            "Download a translation app with offline language packs".to_string(),
            "Keep a hotel business card with the address in local language".to_string(),
            "Locals are generally helpful - don't hesitate to ask for directions".to_string(),
            "Speak clearly and be patient - language barriers are manageable".to_string(),
        ],
    );

    let mut interest_tips = Vec::new();
    if request.has_interest(Interest::Photography) {
        interest_tips.extend([
            "Ask permission before photographing people, especially in rural areas".to_string(),
            "Golden hour photography is best - early morning and late afternoon".to_string(),
            "Protect camera equipment from dust and humidity".to_string(),
        ]);
    }
    if request.has_interest(Interest::Food) {
        interest_tips.extend([
            "Visit local markets in the morning for fresh ingredients".to_string(),
            "Ask hotel staff for authentic local restaurant recommendations".to_string(),
            "Try regional breakfast dishes - often the most authentic meals".to_string(),
        ]);
    }
    if request.has_interest(Interest::Shopping) {
        interest_tips.extend([
            "Government emporiums have fixed prices and authentic products".to_string(),
            "Best bargains are found in local markets, not tourist areas".to_string(),
            "Check weight restrictions for flights before buying heavy items".to_string(),
        ]);
    }
    if request.has_interest(Interest::Adventure) {
        interest_tips.extend([
            "Book adventure activities through reputable tour operators".to_string(),
            "Check weather conditions before outdoor activities".to_string(),
            "Inform hotel staff about your adventure plans and expected return".to_string(),
        ]);
    }
    if request.has_interest(Interest::Culture) {
        interest_tips.extend([
            "Visit cultural sites early morning to avoid crowds".to_string(),
            "Hire local guides for deeper cultural insights".to_string(),
            "Attend local festivals or cultural events if timing aligns".to_string(),
        ]);
    }
    if !interest_tips.is_empty() {
        section.bullets("Tips for Your Specific Interests", interest_tips);
    }

    section
}

fn emergency_section(request: &TripRequest) -> Section {
    let mut section = Section::new("Emergency Contacts");

    let not_provided = "Not provided".to_string();
    section.bullets(
        "Personal Emergency Contacts",
        vec![
            format!(
                "Primary Traveler: {} - {}",
                request.name,
                request.mobile.as_ref().unwrap_or(&not_provided)
            ),
            format!(
                "Emergency Contact: {}",
                request.emergency_contact.as_ref().unwrap_or(&not_provided)
            ),
        ],
    );

    section.table(Table {
        headers: vec!["Service".to_string(), "Number".to_string()],
        rows: vec![
            vec![
                "Universal Emergency (Police, Fire, Medical)".to_string(),
                "112".to_string(),
            ],
            vec!["Police".to_string(), "100".to_string()],
            vec!["Fire Brigade".to_string(), "101".to_string()],
            vec!["Ambulance".to_string(), "108".to_string()],
            vec![
                "Tourist Helpline (24x7 multilingual)".to_string(),
                "1363".to_string(),
            ],
            vec!["Women's Safety".to_string(), "1091".to_string()],
            vec!["Railway Enquiry".to_string(), "139".to_string()],
            vec!["Road Accident Emergency".to_string(), "1073".to_string()],
        ],
        footer: None,
    });

    section.bullets(
        "Important Services & Contacts",
        vec![
            "Airport Enquiry: Check specific airport contact numbers".to_string(),
            "Indian Railways: 139 (booking and enquiry)".to_string(),
            "Taxi/Cab Services: Ola (Dial Ola), Uber (app-based)".to_string(),
            "Medical Emergency: Nearest hospital contact numbers".to_string(),
            "Embassy/Consulate: Keep relevant contact if international traveler".to_string(),
            "Travel Insurance: Keep policy number and emergency contact handy".to_string(),
        ],
    );

    section
}

fn closing_section(request: &TripRequest) -> Section {
    let mut section = Section::new("Closing Note");
    section.paragraph(format!(
        "Enjoy your {}-day adventure in {}! This personalized itinerary matches your interests \
         and budget. Have a wonderful and safe trip!",
        request.duration_days(),
        request.destination
    ));
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::allocate;
    use crate::catalog::ActivityTemplateCatalog;
    use crate::models::{Block, DietaryPreference, TravelPace, TripType};
    use crate::synthesis::synthesize;
    use chrono::NaiveDate;

    fn request(destination: &str, interests: Vec<Interest>) -> TripRequest {
        TripRequest {
            name: "Asha Verma".to_string(),
            email: None,
            mobile: Some("+91 9876543210".to_string()),
            emergency_contact: None,
            destination: destination.to_string(),
            departure_city: "Mumbai".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            travelers: 2,
            total_budget: 100_000,
            accommodation_pct: 40,
            transport_pct: 25,
            food_pct: 20,
            activities_pct: 15,
            transport_modes: vec![TransportMode::Flight, TransportMode::Train],
            dietary: DietaryPreference::Vegetarian,
            trip_type: TripType::Friends,
            interests,
            pace: TravelPace::Moderate,
        }
    }

    fn assembled(destination: &str, interests: Vec<Interest>) -> TripDocument {
        let request = request(destination, interests);
        let itinerary = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        let budget = allocate(request.total_budget, 40, 25, 20, 15);
        assemble(&request, &TravelData::default(), &itinerary, &budget, None)
    }

    #[test]
    fn test_section_order_is_fixed() {
        let doc = assembled("Delhi", vec![Interest::History]);
        let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Trip Overview",
                "Day-by-Day Itinerary",
                "Budget Breakdown",
                "Where to Stay",
                "Transportation Guide",
                "Food & Dining",
                "Packing Essentials",
                "Local Tips & Cultural Guidelines",
                "Emergency Contacts",
                "Closing Note",
            ]
        );
    }

    #[test]
    fn test_budget_table_footer_equals_total() {
        let doc = assembled("Delhi", vec![]);
        let section = doc.section("Budget Breakdown").unwrap();
        let Block::Table(table) = &section.blocks[0] else {
            panic!("expected budget table");
        };
        assert_eq!(table.rows.len(), 5);
        let footer = table.footer.as_ref().unwrap();
        assert_eq!(footer[1], "Rs. 100,000");
    }

    #[test]
    fn test_transport_guide_filters_selected_modes() {
        let doc = assembled("Delhi", vec![]);
        let section = doc.section("Transportation Guide").unwrap();
        let Block::Bullets { items, .. } = &section.blocks[0] else {
            panic!("expected main travel options");
        };
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("by air"));
        assert!(items[1].contains("by train"));
    }

    #[test]
    fn test_unknown_destination_gets_generic_fallbacks() {
        let doc = assembled("Shillong", vec![]);

        let dining = doc.section("Food & Dining").unwrap();
        let Block::Bullets { items, .. } = &dining.blocks[0] else {
            panic!("expected dish list");
        };
        assert!(items[0].contains("Shillong"));

        let tips = doc.section("Local Tips & Cultural Guidelines").unwrap();
        let Block::Bullets { items, .. } = &tips.blocks[0] else {
            panic!("expected cultural tips");
        };
        assert!(items[0].contains("Research Shillong"));

        // No section may come out empty
        for section in &doc.sections {
            assert!(!section.blocks.is_empty(), "empty section {}", section.title);
        }
    }

    #[test]
    fn test_delhi_vegetarian_dishes() {
        let doc = assembled("Delhi", vec![]);
        let dining = doc.section("Food & Dining").unwrap();
        let Block::Bullets { items, .. } = &dining.blocks[0] else {
            panic!("expected dish list");
        };
        assert!(items.iter().any(|d| d.contains("Chole Bhature")));
    }

    #[test]
    fn test_interest_conditional_packing() {
        let with_photo = assembled("Delhi", vec![Interest::Photography]);
        let packing = with_photo.section("Packing Essentials").unwrap();
        let electronics = packing
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Bullets { title, items } if title == "Electronics & Gadgets" => Some(items),
                _ => None,
            })
            .unwrap();
        assert!(electronics.iter().any(|i| i.contains("tripod")));

        let without = assembled("Delhi", vec![]);
        let packing = without.section("Packing Essentials").unwrap();
        let has_special = packing.blocks.iter().any(|b| {
            matches!(b, Block::Bullets { title, .. } if title == "Special Items for Your Interests")
        });
        assert!(!has_special);
    }

    #[test]
    fn test_winter_month_buckets_for_delhi() {
        let season = season_info(1, "Delhi");
        assert_eq!(season.name, "Winter");
        let season = season_info(4, "Delhi");
        assert_eq!(season.name, "Hot Season");
        let season = season_info(7, "Delhi");
        assert_eq!(season.name, "Monsoon Season");
        let season = season_info(10, "Delhi");
        assert_eq!(season.name, "Pleasant Weather");
        let season = season_info(1, "Goa");
        assert_eq!(season.name, "General Season");
    }

    #[test]
    fn test_emergency_section_has_national_numbers_table() {
        let doc = assembled("Delhi", vec![]);
        let section = doc.section("Emergency Contacts").unwrap();
        let Block::Table(table) = &section.blocks[1] else {
            panic!("expected emergency numbers table");
        };
        assert!(table.rows.iter().any(|row| row[1] == "112"));
    }

    #[test]
    fn test_emergency_section_lists_important_services() {
        let doc = assembled("Delhi", vec![]);
        let section = doc.section("Emergency Contacts").unwrap();
        let services = section
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Bullets { title, items } if title == "Important Services & Contacts" => {
                    Some(items)
                }
                _ => None,
            })
            .unwrap();
        assert!(services.iter().any(|s| s.contains("Travel Insurance")));
        assert!(services.iter().any(|s| s.contains("Airport Enquiry")));
    }

    #[test]
    fn test_market_snapshot_enriches_lodging() {
        let request = request("Delhi", vec![]);
        let itinerary = synthesize(&request, &ActivityTemplateCatalog::new()).unwrap();
        let budget = allocate(request.total_budget, 40, 25, 20, 15);
        let travel_data = TravelData {
            accommodation: Some(crate::models::MarketSnapshot {
                raw_text: String::new(),
                prices: vec![1_500, 4_000],
                price_range: "Rs. 1,500 - Rs. 4,000".to_string(),
            }),
            ..TravelData::default()
        };
        let doc = assemble(&request, &travel_data, &itinerary, &budget, None);
        let lodging = doc.section("Where to Stay").unwrap();
        assert!(lodging.blocks.iter().any(|b| {
            matches!(b, Block::Paragraph(p) if p.contains("Rs. 1,500 - Rs. 4,000"))
        }));
    }
}
