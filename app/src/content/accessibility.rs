use leptos::prelude::*;

use crate::posts::Reference;

pub const REFERENCES: &[Reference] = &[
    Reference {
        author: "Berners-Lee, T. 1997. ",
        title: "World Wide Web Consortium Launches International Program Office for Web Accessibility Initiative. ",
        source: "W3C. Available At: https://www.w3.org/Press/IPO-announce",
    },
    Reference {
        author: "Henry, S. L. 2022. ",
        title: "Introduction to Web Accessibility. ",
        source: "W3C Web Accessibility Initiative. Available At: https://www.w3.org/WAI/fundamentals/accessibility-intro/",
    },
    Reference {
        author: "Pickering, H. 2016. ",
        title: "Inclusive Design Patterns. ",
        source: "Freiburg: Smashing Media.",
    },
];

pub fn body() -> AnyView {
    view! {
      <p>
        "When we talk about the web we often talk about it as a space that is open to everyone. Tim Berners-Lee, in the press release for the "
        <cite>"Web Accessibility Initiative"</cite>
        " (Berners-Lee, 1997), goes as far as to say that access by everyone, regardless of disability, is an essential aspect of the web. Yet many of the sites we use every day still shut out a large group of people. In this blog post I look at what web accessibility actually means, why it matters, and a few of the simple practices designers can follow to build sites that more people are able to use."
      </p>
      <p>
        "Shawn Lawton Henry, writing for the W3C in "
        <cite>"Introduction to Web Accessibility"</cite>
        " (Henry, 2022), defines accessibility as designing websites so that people with disabilities can perceive, understand, navigate and interact with them. Importantly, she notes that accessibility also benefits people without disabilities, such as those using a small mobile screen, an older device, a slow connection or dealing with a temporary injury. Accessibility is therefore not a niche feature for a small audience, but a quality that improves the experience for every user."
      </p>
      <p>
        "The first, and perhaps easiest, practice is to "
        <strong>"use semantic markup"</strong>
        ". Headings, lists, navigation landmarks and buttons carry meaning that screen readers rely on to describe a page. A clickable div may look identical to a button, but to a user navigating with a keyboard or screen reader it is invisible. Secondly, every image that communicates information should carry "
        <strong>"meaningful alternative text"</strong>
        ", describing what the image shows rather than simply naming the file."
      </p>
      <p>
        "Thirdly, designers should pay attention to "
        <strong>"colour and contrast"</strong>
        ". Text that does not contrast strongly with its background is difficult to read for users with low vision, and information that is only communicated through colour is lost entirely for users who are colour blind. Finally, as Heydon Pickering argues in "
        <cite>"Inclusive Design Patterns"</cite>
        " (Pickering, 2016), "
        <q>"inclusive design is about making interfaces that work for as many people as possible"</q>
        " and the best way to achieve this is to test with real users and real assistive technology instead of assuming how people will use a site."
      </p>
      <p>
        "In conclusion, accessibility should be treated as a foundation of web design rather than an afterthought. By using semantic markup, writing meaningful alternative text, and designing with contrast and real users in mind, designers can create websites that live up to the promise of a web that is truly for everyone."
      </p>
    }
    .into_any()
}
