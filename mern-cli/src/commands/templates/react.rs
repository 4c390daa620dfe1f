use super::render;

const COMPONENT: &str = r#"import React from 'react';

function {{name}}() {
  return (
    <div className="{{name}}">
      <h1>{{name}}</h1>
    </div>
  );
}

export default {{name}};
"#;

/// Functional React component named `name`, exported by default.
pub fn component(name: &str) -> String {
    render(COMPONENT, &[("name", name)])
}
