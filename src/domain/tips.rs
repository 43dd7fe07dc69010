use rand::Rng;

pub const HEALTH_TIPS: [&str; 8] = [
    "Nail ridges can sometimes indicate hydration levels or nutrient absorption. Remember to drink at least 2L of water today!",
    "Pale nail beds may suggest low iron levels. Include leafy greens and lentils in your diet.",
    "Brittle nails can be a sign of thyroid issues. A simple TSH blood test can help rule this out.",
    "Regular exercise can help balance hormones linked to PCOS. Even a 30-minute walk counts!",
    "Cold hands and fatigue together could suggest thyroid imbalance. Track your symptoms daily.",
    "Healthy nails grow about 3mm per month. Changes in growth rate can indicate health shifts.",
    "Vitamin B12 deficiency can cause nail discoloration. Consider a blood test if you notice changes.",
    "Getting 7-8 hours of sleep helps your body recover and maintain hormonal balance.",
];

pub fn random_tip() -> &'static str {
    let mut rng = rand::thread_rng();
    let idx = rng.gen_range(0..HEALTH_TIPS.len());
    HEALTH_TIPS[idx]
}
