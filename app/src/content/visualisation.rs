use leptos::prelude::*;

use crate::posts::Reference;

pub const REFERENCES: &[Reference] = &[
    Reference {
        author: "Cairo, A. 2016. ",
        title: "The Truthful Art: Data, Charts, and Maps for Communication. ",
        source: "San Francisco: New Riders.",
    },
    Reference {
        author: "Tufte, E. R. 2001. ",
        title: "The Visual Display of Quantitative Information. ",
        source: "2nd ed. Cheshire: Graphics Press.",
    },
    Reference {
        author: "Bostock, M. 2011. ",
        title: "D3: Data-Driven Documents. ",
        source: "IEEE Trans. Vis. Comput. Graph. 17, 2301–2309.",
    },
];

pub fn body() -> AnyView {
    view! {
      <p>
        "The web has become the place where most people encounter data, whether it is a chart of infection rates on a news site or the stats on a fitness app. Because of this, the way data is visualised online has a direct effect on how people understand the world. In this blog post I look at what makes a data visualisation effective on the web, drawing on the work of Edward Tufte and Alberto Cairo, and how the interactive nature of the web changes the way we present information."
      </p>
      <p>
        "Edward Tufte, in "
        <cite>"The Visual Display of Quantitative Information"</cite>
        " (Tufte, 2001), argues that good graphics should "
        <strong>"show the data"</strong>
        " above everything else. He introduces the idea of the data-ink ratio, where every mark on a chart should communicate information, and decoration that does not, which he calls chartjunk, should be removed. On the web, this principle is just as relevant, as gradients, shadows and 3D effects are easy to add but often make a chart harder to read."
      </p>
      <p>
        "Alberto Cairo builds on this in "
        <cite>"The Truthful Art"</cite>
        " (Cairo, 2016), where he states that a visualisation should be "
        <strong>"truthful, functional and insightful"</strong>
        ". A chart with a truncated axis may look more dramatic, but it misleads the reader, and a beautiful chart that answers no question is of little use. As Cairo puts it, "
        <q>"a visualisation is a display of data designed to enable analysis, exploration, and discovery"</q>
        " and designers should keep this purpose in mind before any stylistic choice."
      </p>
      <p>
        "What the web adds to these principles is interactivity. Libraries such as D3, described by Mike Bostock in "
        <cite>"Data-Driven Documents"</cite>
        " (Bostock, 2011), bind data directly to elements on the page, which allows readers to filter, zoom and hover over the information they care about. This lets designers keep the first view simple, following Tufte, while still allowing curious readers to explore the detail underneath, following Cairo."
      </p>
      <p>
        "To conclude, effective data visualisation on the web combines the clarity that Tufte calls for with the honesty that Cairo demands, and then uses interactivity to let the reader explore further. When these ideas are used together, visualisations stop being decoration and become one of the most powerful ways of communicating on the web."
      </p>
    }
    .into_any()
}
