use leptos::prelude::*;

use crate::posts::Reference;

pub const REFERENCES: &[Reference] = &[
    Reference {
        author: "Apple. 2021. ",
        title: "Apple. ",
        source: "[online]. https://www.apple.com",
    },
    Reference {
        author: "Nielsen, J. 2012. ",
        title: "Usability 101: Introduction to Usability. ",
        source: "Nielsen Norman Group. Available At: https://www.nngroup.com/articles/usability-101-introduction-to-usability/",
    },
    Reference {
        author: "Nikolov, A. 2017. ",
        title: "Design Principle: Aesthetics. ",
        source: "UX Des. Available At: https://uxdesign.cc/design-principle-aesthetics-af926f8f86fe",
    },
    Reference {
        author: "Thorlacius, L. 2007. ",
        title: "The Role of Aesthetics in Web Design. ",
        source: "Nord. Rev. 28, 63–76. https://doi.org/10.1515/nor-2017-0201",
    },
];

pub fn body() -> AnyView {
    view! {
      <p>
        "Although functionality has always been considered one of the core building blocks of good web design, the same cannot be said of a websites aesthetics. However, scholars, such as Lisbeth Thorlacius in their journal article "
        <cite>"The Role Of Aesthetics In Web Design"</cite>
        " (Thorlacius, 2007), argue that the aesthetics of a website are just as important as its functionality. As such, in this blog post I aim to highlight this importance by bringing to light some of the main ways aesthetics aid web design. To do this, I start by defining the difference between a websites functionality and aesthetics. Thereafter, I highlight the four core principles of aesthetics in web design that Thorlacius outlines, using an example to further this understanding; before concluding with my overall thoughts on aesthetics in web design."
      </p>
      <p>
        "To start, before we can look at the main ways in which aesthetics can be used to improve a websites design, we must have a firm understanding of the terms functionality and aesthetics. Whilst many define functionality in web design as the number of possible actions a website allows a user to perform; Jakob Nielsen, in their 2012 article "
        <cite>"Usability 101: Introduction to Usability"</cite>
        " (Nielsen, 2012), notes that functionality also refers to how easy it is for a user to perform these actions. Web aesthetics, on the other hand, refers solely to the websites visual design. However, these definitions are not mutually exclusive, and should instead be used in combination with one another to allow for an even better web, and user, experience."
      </p>
      <p>
        "As such, we can then start to look at the four ways in which aesthetics can support a websites creation and overall success – according to Thorlacius (2007: 67). Firstly, she states that a websites aesthetics should "
        <strong>"support the senders image"</strong>
        ". To understand this, we can use the example of the Apple.com homepage, as seen in figure 1 below. Here, we clearly see that the site makes use of a minimalistic aesthetic – matching the brand identity that Apple has become known for through both their products designs and ease-of-use. Secondly, the aesthetics of a website should "
        <strong>"relate to its content and functions"</strong>
        " – with this aesthetic being used to increase its functionality. In figure 1, we see that although the website is minimalistic, it makes good use of semiotics to easily communicate both the function of buttons, through blue text with arrows next to them, and the importance of information, through a good visual hierarchy."
      </p>
      <figure class="blog-figure">
        <img class="blog-image" src="/assets/Blog2/BlogPicture.svg" alt="A screenshot of the Apple.com homepage" />
        <figcaption>"Figure 1: A screenshot of Apple.com's homepage (Apple, 2021)"</figcaption>
      </figure>
      <p>
        "Next, Thorlacius notes that the aesthetic design of a website should "
        <cite>"align with the sites genre"</cite>
        ". For example, if Apple.com, a minimalistic information and e-commerce site, were to swap aesthetics with Netflix.com, an entertainment site that prioritizes large visuals, then many users would become confused – as Netflix’s aesthetic is not conducive to sales and minimalism. Lastly, she states that the aesthetics should "
        <cite>"match the target audience"</cite>
        ". If Apple’s target audience was an older, less technologically inclined, generation then the websites visual aesthetics should consist of big text and less visual signifiers – or vice versa, for a younger audience. However, Apple targets all ages and thus their aesthetic caters to this – making use of mid-sized fonts and minimal, but effective, signs and signifiers. As such, we can then conclude that, through these principles and the example of the Apple.com homepage, good use of aesthetics is important in web design and enhances the overall user experience."
      </p>
      <p>
        "So, by using these principles we can then see that, as Anton Nikolov notes in his 2017 article "
        <cite>"Design principle: Aesthetics"</cite>
        ", "
        <q>
          "good looking products and user interfaces are perceived as more valuable and having more qualities"
        </q>
        " (Nikolov, 2017: para. 6) – and thus, aesthetics should be considered as important as functionality in a websites design. However, the four aesthetic principles covered in this blog post merely form the foundation for aesthetics in web design, and there are countless other ideas that can be applied, in addition to this, that I did not cover. But, by utilizing these principles as a foundation, designers can then create more impactful experiences for the user interacting with their site."
      </p>
    }
    .into_any()
}
