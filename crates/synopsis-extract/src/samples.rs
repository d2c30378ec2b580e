//! Built-in sample articles for trying the summarizer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleArticle {
    pub title: &'static str,
    pub content: &'static str,
}

pub const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        title: "Climate Change Impact",
        content: "Climate change is causing significant environmental changes worldwide. \
            Rising temperatures are melting polar ice caps and glaciers at unprecedented rates. \
            Sea levels are rising, threatening coastal communities and ecosystems. \
            Extreme weather events like hurricanes, droughts, and floods are becoming more frequent and severe. \
            Scientists warn that without immediate action to reduce greenhouse gas emissions, these effects will worsen. \
            Renewable energy sources like solar and wind power offer promising solutions. \
            Governments and businesses must work together to implement sustainable practices and reduce carbon footprints.",
    },
    SampleArticle {
        title: "AI in Healthcare",
        content: "Artificial intelligence is revolutionizing healthcare by improving diagnosis accuracy and treatment efficiency. \
            Machine learning algorithms can analyze medical images to detect diseases earlier than traditional methods. \
            AI-powered systems help doctors make better decisions by processing vast amounts of patient data. \
            Drug discovery is accelerated through AI models that predict molecular interactions. \
            Robotic surgery systems provide greater precision and reduce recovery times. \
            However, challenges remain in ensuring data privacy and algorithm fairness. \
            Healthcare professionals need training to work effectively with AI tools.",
    },
    SampleArticle {
        title: "Remote Work Trends",
        content: "Remote work has become a permanent fixture in the modern workplace following the global pandemic. \
            Companies have discovered that many employees are more productive when working from home. \
            This shift has led to cost savings on office space and improved work-life balance for workers. \
            Digital collaboration tools have evolved to support distributed teams effectively. \
            However, challenges include maintaining company culture and ensuring effective communication. \
            Hybrid work models combining remote and in-office work are emerging as a popular compromise. \
            The future of work will likely involve greater flexibility and technology integration.",
    },
];
