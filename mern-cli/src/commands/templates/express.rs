//! Boilerplate for files inside an Express project.

use super::render;

const MODEL: &str = r#"const mongoose = require('mongoose');

const {{name}}Schema = new mongoose.Schema(
  {
    name: {
      type: String,
      required: true,
      trim: true,
    },
  },
  { timestamps: true }
);

const {{name}} = mongoose.model('{{name}}', {{name}}Schema);

module.exports = {{name}};
"#;

const CONTROLLER: &str = r#"const {{name}} = require('../models/{{name}}');

const get{{name}}s = async (req, res) => {
  try {
    const items = await {{name}}.find();
    res.status(200).json(items);
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};

const get{{name}}ById = async (req, res) => {
  try {
    const item = await {{name}}.findById(req.params.id);
    if (!item) {
      return res.status(404).json({ message: '{{name}} not found' });
    }
    res.status(200).json(item);
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};

const create{{name}} = async (req, res) => {
  try {
    const item = await {{name}}.create(req.body);
    res.status(201).json(item);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

const update{{name}} = async (req, res) => {
  try {
    const item = await {{name}}.findByIdAndUpdate(req.params.id, req.body, { new: true });
    if (!item) {
      return res.status(404).json({ message: '{{name}} not found' });
    }
    res.status(200).json(item);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

const delete{{name}} = async (req, res) => {
  try {
    const item = await {{name}}.findByIdAndDelete(req.params.id);
    if (!item) {
      return res.status(404).json({ message: '{{name}} not found' });
    }
    res.status(200).json({ message: '{{name}} deleted' });
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};

module.exports = {
  get{{name}}s,
  get{{name}}ById,
  create{{name}},
  update{{name}},
  delete{{name}},
};
"#;

const ROUTE: &str = r#"const express = require('express');
const {
  get{{name}}s,
  get{{name}}ById,
  create{{name}},
  update{{name}},
  delete{{name}},
} = require('../controllers/{{name}}');

const router = express.Router();

router.route('/').get(get{{name}}s).post(create{{name}});
router.route('/:id').get(get{{name}}ById).put(update{{name}}).delete(delete{{name}});

module.exports = router;
"#;

const MIDDLEWARE: &str = r#"const {{name}} = (req, res, next) => {
  console.log(`[{{name}}] ${req.method} ${req.originalUrl}`);
  next();
};

module.exports = {{name}};
"#;

/// Mongoose model: `<name>Schema` and a model exported as `<name>`.
pub fn model(name: &str) -> String {
    render(MODEL, &[("name", name)])
}

/// CRUD controller backed by the `<name>` model.
pub fn controller(name: &str) -> String {
    render(CONTROLLER, &[("name", name)])
}

/// Express router wired to the `<name>` controller.
pub fn route(name: &str) -> String {
    render(ROUTE, &[("name", name)])
}

pub fn middleware(name: &str) -> String {
    render(MIDDLEWARE, &[("name", name)])
}
